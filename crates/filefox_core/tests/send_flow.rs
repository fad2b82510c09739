use std::sync::Once;

use filefox_core::{
    update, Answer, AppState, Effect, Msg, Role, SourceRef, DEFAULT_TOP_K, GENERIC_ANSWER_FAILURE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn submit_question(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SendSubmitted)
}

#[test]
fn send_appends_user_message_and_emits_ask() {
    init_logging();
    let (state, effects) = submit_question(AppState::new(), "  what is in the report?  ");
    let view = state.view();

    assert!(view.is_loading);
    assert!(view.input.is_empty());
    assert_eq!(view.messages.len(), 1);
    assert_eq!(view.messages[0].role, Role::User);
    assert_eq!(view.messages[0].content, "what is in the report?");
    assert_eq!(
        effects,
        vec![Effect::AskQuestion {
            question: "what is in the report?".to_string(),
            top_k: DEFAULT_TOP_K,
        }]
    );
}

#[test]
fn successful_answer_appends_assistant_message_with_sources() {
    init_logging();
    let (state, _) = submit_question(AppState::new(), "what is in the report?");
    let (state, effects) = update(
        state,
        Msg::AskCompleted {
            result: Ok(Answer {
                text: "Quarterly revenue grew 4%.".to_string(),
                sources: vec![SourceRef {
                    filename: "report.pdf".to_string(),
                    score: 0.87,
                }],
            }),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert!(!view.is_loading);
    assert_eq!(view.messages.len(), 2);
    assert_eq!(view.messages[1].role, Role::Assistant);
    assert_eq!(view.messages[1].content, "Quarterly revenue grew 4%.");
    assert_eq!(view.messages[1].sources.len(), 1);
    assert_eq!(view.messages[1].sources[0].filename, "report.pdf");
}

#[test]
fn failed_answer_is_genericized() {
    init_logging();
    let (state, _) = submit_question(AppState::new(), "what is in the report?");
    let (state, _) = update(
        state,
        Msg::AskCompleted {
            result: Err("query failed with status 502".to_string()),
        },
    );
    let view = state.view();

    assert!(!view.is_loading);
    assert_eq!(view.messages.len(), 2);
    assert_eq!(view.messages[1].role, Role::Assistant);
    assert_eq!(view.messages[1].content, GENERIC_ANSWER_FAILURE);
    assert!(view.messages[1].sources.is_empty());
}

#[test]
fn blank_input_is_a_silent_noop() {
    init_logging();
    let (state, effects) = submit_question(AppState::new(), "   \t  ");
    let view = state.view();

    assert!(effects.is_empty());
    assert!(!view.is_loading);
    assert!(view.messages.is_empty());
}

#[test]
fn send_is_not_reentrant_while_loading() {
    init_logging();
    let (state, _) = submit_question(AppState::new(), "first question");
    let (state, effects) = submit_question(state, "second question");
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.messages.len(), 1);
    assert!(view.is_loading);
}
