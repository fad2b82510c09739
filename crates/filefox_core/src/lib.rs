//! FileFox core: pure interaction state machine and view-model helpers.
mod effect;
mod message;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::{Effect, DEFAULT_TOP_K};
pub use message::{Message, MessageId, Role, SourceRef, Transcript};
pub use msg::{Answer, Msg, UploadReceipt};
pub use state::{AppState, ClearState, SendState, UploadState};
pub use update::{update, CLEAR_SUCCESS_NOTICE, GENERIC_ANSWER_FAILURE};
pub use validate::{
    validate, FileCandidate, ValidationError, ALLOWED_MIME_TYPES, MAX_UPLOAD_BYTES,
};
pub use view_model::AppViewModel;
