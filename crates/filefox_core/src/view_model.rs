use crate::Message;

/// Snapshot the presentation layer renders from. Derived entirely from
/// `AppState`; the busy flags mirror the per-flow states.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub messages: Vec<Message>,
    pub input: String,
    pub is_loading: bool,
    pub is_uploading: bool,
    pub is_clearing: bool,
    pub awaiting_clear_confirm: bool,
    pub dirty: bool,
}

impl AppViewModel {
    /// True while any flow is in flight or waiting on the confirm prompt.
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_uploading || self.is_clearing || self.awaiting_clear_confirm
    }
}
