use serde::{Deserialize, Serialize};

/// Body for `POST /query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest<'a> {
    pub question: &'a str,
    pub top_k: u32,
}

/// Successful response from `POST /query`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SourceEntry {
    pub filename: String,
    pub score: f64,
}

/// Successful response from `POST /upload`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    pub chunks_processed: u32,
}
