use std::time::Duration;

use reqwest::multipart::{Form, Part};

use crate::error::{decode_error_body, ApiError, ApiErrorKind};
use crate::types::{QueryRequest, QueryResponse, UploadResponse};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// A file ready to be sent, bytes already read from disk.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Seam between the interaction machinery and the document service.
#[async_trait::async_trait]
pub trait DocumentApi: Send + Sync {
    async fn ask(&self, question: &str, top_k: u32) -> Result<QueryResponse, ApiError>;
    async fn upload(&self, file: FileUpload) -> Result<UploadResponse, ApiError>;
    async fn clear_all(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiErrorKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl DocumentApi for ReqwestApi {
    async fn ask(&self, question: &str, top_k: u32) -> Result<QueryResponse, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/query"))
            .json(&QueryRequest { question, top_k })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // No body parsing here; the send flow genericizes anyway.
            return Err(ApiError::new(
                ApiErrorKind::HttpStatus(status.as_u16()),
                format!("query failed with status {}", status.as_u16()),
            ));
        }

        response
            .json::<QueryResponse>()
            .await
            .map_err(|err| ApiError::new(ApiErrorKind::MalformedBody, err.to_string()))
    }

    async fn upload(&self, file: FileUpload) -> Result<UploadResponse, ApiError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str(&file.mime)
            .map_err(map_reqwest_error)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;

        if !(200..300).contains(&status) {
            return Err(decode_error_body(status, &body).into());
        }

        serde_json::from_str::<UploadResponse>(&body)
            .map_err(|err| ApiError::new(ApiErrorKind::MalformedBody, err.to_string()))
    }

    async fn clear_all(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.endpoint("/clear"))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiErrorKind::HttpStatus(status.as_u16()),
                format!("clear failed with status {}", status.as_u16()),
            ));
        }
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiErrorKind::Timeout, err.to_string());
    }
    ApiError::new(ApiErrorKind::Network, err.to_string())
}
