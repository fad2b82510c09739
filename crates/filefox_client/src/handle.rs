use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use app_logging::app_debug;

use crate::api::{ApiSettings, DocumentApi, FileUpload, ReqwestApi};
use crate::error::{ApiError, ApiErrorKind};
use crate::types::{QueryResponse, UploadResponse};

enum ClientCommand {
    Ask {
        question: String,
        top_k: u32,
    },
    Upload {
        /// Opaque token the caller uses to pair the settlement with the
        /// transcript entry it belongs to.
        token: u64,
        path: PathBuf,
        filename: String,
        mime: String,
    },
    ClearAll,
}

/// Settled operation, reported in completion order.
#[derive(Debug)]
pub enum ClientEvent {
    AskFinished {
        result: Result<QueryResponse, ApiError>,
    },
    UploadFinished {
        token: u64,
        result: Result<UploadResponse, ApiError>,
    },
    ClearFinished {
        result: Result<(), ApiError>,
    },
}

/// Runs the API client on a dedicated thread with its own tokio runtime so
/// the interaction loop never blocks on the network. Commands are executed
/// exactly once each; there is no retry and no cancellation.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let api = Arc::new(ReqwestApi::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn ask(&self, question: impl Into<String>, top_k: u32) {
        let _ = self.cmd_tx.send(ClientCommand::Ask {
            question: question.into(),
            top_k,
        });
    }

    pub fn upload(
        &self,
        token: u64,
        path: PathBuf,
        filename: impl Into<String>,
        mime: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(ClientCommand::Upload {
            token,
            path,
            filename: filename.into(),
            mime: mime.into(),
        });
    }

    pub fn clear_all(&self) {
        let _ = self.cmd_tx.send(ClientCommand::ClearAll);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Block up to `timeout` for the next settlement.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClientEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &dyn DocumentApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Ask { question, top_k } => {
            app_debug!("ask top_k={} question_len={}", top_k, question.len());
            let result = api.ask(&question, top_k).await;
            let _ = event_tx.send(ClientEvent::AskFinished { result });
        }
        ClientCommand::Upload {
            token,
            path,
            filename,
            mime,
        } => {
            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    app_debug!("upload file={} bytes={}", filename, bytes.len());
                    api.upload(FileUpload {
                        filename,
                        mime,
                        bytes,
                    })
                    .await
                }
                Err(err) => Err(ApiError {
                    kind: ApiErrorKind::Io,
                    message: format!("could not read {}: {err}", path.display()),
                }),
            };
            let _ = event_tx.send(ClientEvent::UploadFinished { token, result });
        }
        ClientCommand::ClearAll => {
            let result = api.clear_all().await;
            let _ = event_tx.send(ClientEvent::ClearFinished { result });
        }
    }
}
