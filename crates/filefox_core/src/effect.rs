use crate::{FileCandidate, MessageId};

/// Number of source chunks requested per question.
pub const DEFAULT_TOP_K: u32 = 3;

/// Side effects requested by `update`. The app layer executes them; the
/// network ones exactly once each, with no retry and no cancellation.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AskQuestion { question: String, top_k: u32 },
    UploadFile {
        placeholder: MessageId,
        candidate: FileCandidate,
    },
    ClearAll,
    /// Show the blocking yes/no prompt for clear-all.
    ConfirmClear,
}
