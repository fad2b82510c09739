use std::time::Duration;

use app_logging::{app_info, app_warn};
use filefox_client::{ApiError, ApiSettings, ClientEvent, ClientHandle};
use filefox_core::{Answer, Effect, Msg, SourceRef, UploadReceipt};

/// Executes network effects through the client handle and maps settlements
/// back into core msgs. Raw failure text is logged here; whether the
/// transcript shows it verbatim or genericized is the core's decision.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        Ok(Self {
            client: ClientHandle::new(settings)?,
        })
    }

    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::AskQuestion { question, top_k } => {
                app_info!("AskQuestion top_k={} question_len={}", top_k, question.len());
                self.client.ask(question, top_k);
            }
            Effect::UploadFile {
                placeholder,
                candidate,
            } => {
                app_info!("UploadFile file={} len={}", candidate.name, candidate.len);
                self.client
                    .upload(placeholder, candidate.path, candidate.name, candidate.mime);
            }
            Effect::ClearAll => {
                app_info!("ClearAll");
                self.client.clear_all();
            }
            // Resolved by the front-end before effects reach the runner.
            Effect::ConfirmClear => {}
        }
    }

    /// Block up to `timeout` for the next settlement.
    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.client.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::AskFinished { result } => Msg::AskCompleted {
            result: match result {
                Ok(response) => Ok(Answer {
                    text: response.answer,
                    sources: response
                        .sources
                        .into_iter()
                        .map(|source| SourceRef {
                            filename: source.filename,
                            score: source.score,
                        })
                        .collect(),
                }),
                Err(err) => {
                    app_warn!("query failed: {}", err.message);
                    Err(err.message)
                }
            },
        },
        ClientEvent::UploadFinished { token, result } => Msg::UploadCompleted {
            placeholder: token,
            result: match result {
                Ok(response) => Ok(UploadReceipt {
                    chunks_processed: response.chunks_processed,
                }),
                Err(err) => {
                    app_warn!("upload failed: {}", err.message);
                    Err(err.message)
                }
            },
        },
        ClientEvent::ClearFinished { result } => Msg::ClearCompleted {
            result: result.map_err(|err| {
                app_warn!("clear failed: {}", err.message);
                err.message
            }),
        },
    }
}
