use std::fmt;
use std::path::PathBuf;

/// Hard cap on upload size: 50 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// MIME types the remote service can index. Enforcement is by declared
/// MIME type; the `.pdf`/`.docx`/`.csv` extensions surfaced to the user
/// must stay in step with this list.
pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/csv",
];

/// A file the user selected for upload. Only `name`, `len` and `mime` are
/// ever inspected; `path` is carried along so the upload effect can read
/// the bytes later. Never stored in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub name: String,
    pub len: u64,
    pub mime: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    FileTooLarge { len: u64 },
    UnsupportedType { mime: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FileTooLarge { .. } => {
                write!(f, "File too large. Max size: 50MB")
            }
            ValidationError::UnsupportedType { mime } => {
                write!(f, "Unsupported file type: {mime}. Allowed: PDF, DOCX, CSV")
            }
        }
    }
}

/// Pure pre-flight check; a rejected candidate never reaches the network.
/// Size is checked before type, and only the first failure is reported.
pub fn validate(candidate: &FileCandidate) -> Result<(), ValidationError> {
    if candidate.len > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge { len: candidate.len });
    }
    if !ALLOWED_MIME_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&candidate.mime))
    {
        return Err(ValidationError::UnsupportedType {
            mime: candidate.mime.clone(),
        });
    }
    Ok(())
}
