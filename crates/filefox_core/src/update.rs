use crate::{
    validate, AppState, ClearState, Effect, Msg, Role, SendState, UploadState, DEFAULT_TOP_K,
};

/// Shown in place of any send-flow failure. The underlying cause is logged
/// by the app layer but deliberately kept out of the transcript.
pub const GENERIC_ANSWER_FAILURE: &str = "Sorry, I encountered an error.";

/// The single entry the transcript is reset to after a successful clear.
pub const CLEAR_SUCCESS_NOTICE: &str =
    "✓ All documents cleared successfully. You can now upload new documents.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SendSubmitted => {
            let question = state.input().trim().to_string();
            if question.is_empty() || state.send() == SendState::Sending {
                return (state, Vec::new());
            }

            state.set_input(String::new());
            state.transcript().push(Role::User, question.clone());
            state.set_send(SendState::Sending);
            state.mark_dirty();
            vec![Effect::AskQuestion {
                question,
                top_k: DEFAULT_TOP_K,
            }]
        }
        Msg::AskCompleted { result } => {
            match result {
                Ok(answer) => {
                    state
                        .transcript()
                        .push_with_sources(Role::Assistant, answer.text, answer.sources);
                }
                Err(_) => {
                    // Raw error already logged by the effect runner.
                    state
                        .transcript()
                        .push(Role::Assistant, GENERIC_ANSWER_FAILURE);
                }
            }
            state.set_send(SendState::Idle);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FileChosen(candidate) => {
            if matches!(state.upload(), UploadState::Uploading { .. }) {
                return (state, Vec::new());
            }

            let placeholder = state
                .transcript()
                .push(Role::System, format!("Uploading {}...", candidate.name));
            state.set_upload(UploadState::Uploading {
                placeholder,
                filename: candidate.name.clone(),
            });
            state.mark_dirty();

            match validate(&candidate) {
                Ok(()) => vec![Effect::UploadFile {
                    placeholder,
                    candidate,
                }],
                Err(err) => {
                    // Settles locally; a rejected candidate never reaches
                    // the network.
                    state
                        .transcript()
                        .replace(placeholder, format!("✗ Upload failed: {err}"));
                    state.set_upload(UploadState::Idle);
                    Vec::new()
                }
            }
        }
        Msg::UploadCompleted {
            placeholder,
            result,
        } => {
            let filename = match state.upload() {
                UploadState::Uploading {
                    placeholder: pending,
                    filename,
                } if *pending == placeholder => filename.clone(),
                _ => String::new(),
            };
            let outcome = match result {
                Ok(receipt) => format!(
                    "✓ {filename} uploaded successfully! ({} chunks processed)",
                    receipt.chunks_processed
                ),
                Err(message) => format!("✗ Upload failed: {message}"),
            };
            state.transcript().replace(placeholder, outcome);
            state.set_upload(UploadState::Idle);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ClearRequested => {
            if state.clear() != ClearState::Idle {
                return (state, Vec::new());
            }
            state.set_clear(ClearState::AwaitingConfirm);
            state.mark_dirty();
            vec![Effect::ConfirmClear]
        }
        Msg::ClearConfirmed => {
            if state.clear() != ClearState::AwaitingConfirm {
                return (state, Vec::new());
            }
            state.set_clear(ClearState::Clearing);
            state.mark_dirty();
            vec![Effect::ClearAll]
        }
        Msg::ClearDeclined => {
            if state.clear() == ClearState::AwaitingConfirm {
                state.set_clear(ClearState::Idle);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ClearCompleted { result } => {
            match result {
                Ok(()) => {
                    // The one flow that discards history rather than appends.
                    state
                        .transcript()
                        .reset_with(Role::System, CLEAR_SUCCESS_NOTICE);
                }
                Err(message) => {
                    state
                        .transcript()
                        .push(Role::System, format!("✗ Failed to clear database: {message}"));
                }
            }
            state.set_clear(ClearState::Idle);
            state.mark_dirty();
            Vec::new()
        }
    };

    (state, effects)
}
