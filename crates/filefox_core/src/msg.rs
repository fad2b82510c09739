use crate::{FileCandidate, MessageId, SourceRef};

/// Successful answer from the remote service, already mapped into core
/// types by the app layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<SourceRef>,
}

/// Successful upload acknowledgement from the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadReceipt {
    pub chunks_processed: u32,
}

/// Everything that can happen to the interaction state machine. Errors
/// arrive as already-rendered text; whether that text is shown verbatim
/// or genericized is decided per flow in `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the question input box.
    InputChanged(String),
    /// User submitted the current input as a question.
    SendSubmitted,
    /// The ask operation settled.
    AskCompleted { result: Result<Answer, String> },
    /// User selected a file for upload.
    FileChosen(FileCandidate),
    /// The upload operation settled for the given placeholder.
    UploadCompleted {
        placeholder: MessageId,
        result: Result<UploadReceipt, String>,
    },
    /// User triggered clear-all; still needs confirmation.
    ClearRequested,
    /// User confirmed the clear prompt.
    ClearConfirmed,
    /// User declined the clear prompt.
    ClearDeclined,
    /// The clear operation settled.
    ClearCompleted { result: Result<(), String> },
}
