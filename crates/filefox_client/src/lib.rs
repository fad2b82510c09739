//! FileFox remote client: typed access to the document service API and
//! the background handle that runs requests off the interaction thread.
mod api;
mod error;
mod handle;
mod types;

pub use api::{ApiSettings, DocumentApi, FileUpload, ReqwestApi};
pub use error::{decode_error_body, ApiError, ApiErrorKind, ErrorBody, HttpFailure};
pub use handle::{ClientEvent, ClientHandle};
pub use types::{QueryRequest, QueryResponse, SourceEntry, UploadResponse};
