use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Request completed with a non-success status.
    HttpStatus(u16),
    /// Request timed out before completing.
    Timeout,
    /// Request never completed (connect refused, DNS failure, ...).
    Network,
    /// A success response carried a body the client could not decode.
    MalformedBody,
    /// The selected file could not be read from disk.
    Io,
}

/// Uniform failure shape for all three operations. `message` is what a
/// flow surfaces when its policy is to show errors verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Error body of a non-success upload response. The service returns either
/// structured JSON or a plain text/HTML error page, so decoding is two-tier:
/// structured `{detail}` first, raw text as the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    Detail(String),
    Raw(String),
}

/// Non-success upload response with its status and decoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFailure {
    pub status: u16,
    pub body: ErrorBody,
}

impl HttpFailure {
    /// Human-readable detail: the structured detail as-is, or the raw body
    /// prefixed with the HTTP status.
    pub fn message(&self) -> String {
        match &self.body {
            ErrorBody::Detail(detail) => detail.clone(),
            ErrorBody::Raw(text) => format!("HTTP {}: {}", self.status, text),
        }
    }
}

impl From<HttpFailure> for ApiError {
    fn from(failure: HttpFailure) -> Self {
        let message = failure.message();
        ApiError::new(ApiErrorKind::HttpStatus(failure.status), message)
    }
}

/// Decode a non-success response body, falling back to the raw text when
/// it is not the service's structured error shape.
pub fn decode_error_body(status: u16, body: &str) -> HttpFailure {
    #[derive(Deserialize)]
    struct StructuredError {
        detail: String,
    }

    let body = match serde_json::from_str::<StructuredError>(body) {
        Ok(structured) => ErrorBody::Detail(structured.detail),
        Err(_) => ErrorBody::Raw(body.to_string()),
    };
    HttpFailure { status, body }
}

#[cfg(test)]
mod tests {
    use super::{decode_error_body, ApiError, ApiErrorKind, ErrorBody};

    #[test]
    fn structured_detail_is_extracted() {
        let failure = decode_error_body(409, r#"{"detail":"duplicate file"}"#);
        assert_eq!(failure.status, 409);
        assert_eq!(failure.body, ErrorBody::Detail("duplicate file".to_string()));
        assert_eq!(failure.message(), "duplicate file");
    }

    #[test]
    fn non_json_body_falls_back_to_raw_with_status() {
        let failure = decode_error_body(500, "Internal Server Error");
        assert_eq!(
            failure.body,
            ErrorBody::Raw("Internal Server Error".to_string())
        );
        assert_eq!(failure.message(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn json_without_detail_field_falls_back_to_raw() {
        let failure = decode_error_body(422, r#"{"error":"nope"}"#);
        assert!(matches!(failure.body, ErrorBody::Raw(_)));
        assert_eq!(failure.message(), r#"HTTP 422: {"error":"nope"}"#);
    }

    #[test]
    fn failure_converts_to_api_error() {
        let err: ApiError = decode_error_body(409, r#"{"detail":"duplicate file"}"#).into();
        assert_eq!(err.kind, ApiErrorKind::HttpStatus(409));
        assert_eq!(err.message, "duplicate file");
    }
}
