use std::path::PathBuf;
use std::sync::Once;

use filefox_core::{
    update, Answer, AppState, Effect, FileCandidate, Msg, Role, UploadReceipt,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn candidate(name: &str, len: u64, mime: &str) -> FileCandidate {
    FileCandidate {
        path: PathBuf::from(name),
        name: name.to_string(),
        len,
        mime: mime.to_string(),
    }
}

fn choose_file(state: AppState, file: FileCandidate) -> (AppState, Vec<Effect>) {
    update(state, Msg::FileChosen(file))
}

#[test]
fn valid_file_appends_placeholder_and_emits_upload() {
    init_logging();
    let file = candidate("report.pdf", 1024, "application/pdf");
    let (state, effects) = choose_file(AppState::new(), file.clone());
    let view = state.view();

    assert!(view.is_uploading);
    assert_eq!(view.messages.len(), 1);
    assert_eq!(view.messages[0].role, Role::System);
    assert_eq!(view.messages[0].content, "Uploading report.pdf...");
    assert_eq!(
        effects,
        vec![Effect::UploadFile {
            placeholder: view.messages[0].id,
            candidate: file,
        }]
    );
}

#[test]
fn oversized_file_settles_locally_without_network() {
    init_logging();
    let file = candidate("big.pdf", 60 * 1024 * 1024, "application/pdf");
    let (state, effects) = choose_file(AppState::new(), file);
    let view = state.view();

    assert!(effects.is_empty());
    assert!(!view.is_uploading);
    assert_eq!(view.messages.len(), 1);
    assert_eq!(
        view.messages[0].content,
        "✗ Upload failed: File too large. Max size: 50MB"
    );
}

#[test]
fn unsupported_type_settles_locally_without_network() {
    init_logging();
    let file = candidate("photo.png", 1024, "image/png");
    let (state, effects) = choose_file(AppState::new(), file);
    let view = state.view();

    assert!(effects.is_empty());
    assert!(!view.is_uploading);
    assert_eq!(
        view.messages[0].content,
        "✗ Upload failed: Unsupported file type: image/png. Allowed: PDF, DOCX, CSV"
    );
}

#[test]
fn successful_upload_replaces_placeholder() {
    init_logging();
    let file = candidate("report.pdf", 1024, "application/pdf");
    let (state, effects) = choose_file(AppState::new(), file);
    let placeholder = match &effects[0] {
        Effect::UploadFile { placeholder, .. } => *placeholder,
        other => panic!("unexpected effect: {other:?}"),
    };

    let (state, _) = update(
        state,
        Msg::UploadCompleted {
            placeholder,
            result: Ok(UploadReceipt {
                chunks_processed: 7,
            }),
        },
    );
    let view = state.view();

    assert!(!view.is_uploading);
    assert_eq!(view.messages.len(), 1);
    assert_eq!(
        view.messages[0].content,
        "✓ report.pdf uploaded successfully! (7 chunks processed)"
    );
}

#[test]
fn failed_upload_surfaces_error_verbatim() {
    init_logging();
    let file = candidate("report.pdf", 1024, "application/pdf");
    let (state, effects) = choose_file(AppState::new(), file);
    let placeholder = match &effects[0] {
        Effect::UploadFile { placeholder, .. } => *placeholder,
        other => panic!("unexpected effect: {other:?}"),
    };

    let (state, _) = update(
        state,
        Msg::UploadCompleted {
            placeholder,
            result: Err("duplicate file".to_string()),
        },
    );
    let view = state.view();

    assert!(!view.is_uploading);
    assert_eq!(view.messages[0].content, "✗ Upload failed: duplicate file");
}

#[test]
fn upload_is_not_reentrant_while_uploading() {
    init_logging();
    let (state, _) = choose_file(
        AppState::new(),
        candidate("report.pdf", 1024, "application/pdf"),
    );
    let (state, effects) = choose_file(state, candidate("data.csv", 512, "text/csv"));
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.messages.len(), 1);
    assert!(view.is_uploading);
}

#[test]
fn settlement_targets_placeholder_even_after_interleaved_answer() {
    init_logging();
    // A pending query may settle between the placeholder append and the
    // upload settlement; replacement is by id, not by position.
    let (state, effects) = choose_file(
        state_with_pending_question(),
        candidate("report.pdf", 1024, "application/pdf"),
    );
    let placeholder = match &effects[0] {
        Effect::UploadFile { placeholder, .. } => *placeholder,
        other => panic!("unexpected effect: {other:?}"),
    };

    let (state, _) = update(
        state,
        Msg::AskCompleted {
            result: Ok(Answer {
                text: "late answer".to_string(),
                sources: Vec::new(),
            }),
        },
    );
    let (state, _) = update(
        state,
        Msg::UploadCompleted {
            placeholder,
            result: Ok(UploadReceipt {
                chunks_processed: 2,
            }),
        },
    );
    let view = state.view();

    assert_eq!(view.messages.len(), 3);
    assert_eq!(
        view.messages[1].content,
        "✓ report.pdf uploaded successfully! (2 chunks processed)"
    );
    assert_eq!(view.messages[2].content, "late answer");
    assert!(!view.is_uploading);
    assert!(!view.is_loading);
}

fn state_with_pending_question() -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged("question".to_string()));
    let (state, _) = update(state, Msg::SendSubmitted);
    state
}
