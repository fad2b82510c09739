use crate::view_model::AppViewModel;
use crate::{MessageId, Transcript};

/// Send flow: one question in flight at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
}

/// Upload flow. The in-flight variant remembers which transcript entry is
/// the placeholder and the filename to mention when it settles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading {
        placeholder: MessageId,
        filename: String,
    },
}

/// Clear flow, including the confirmation step before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearState {
    #[default]
    Idle,
    AwaitingConfirm,
    Clearing,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    transcript: Transcript,
    input: String,
    send: SendState,
    upload: UploadState,
    clear: ClearState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            messages: self.transcript.messages().to_vec(),
            input: self.input.clone(),
            is_loading: self.send == SendState::Sending,
            is_uploading: matches!(self.upload, UploadState::Uploading { .. }),
            is_clearing: self.clear == ClearState::Clearing,
            awaiting_clear_confirm: self.clear == ClearState::AwaitingConfirm,
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn transcript(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub(crate) fn send(&self) -> SendState {
        self.send
    }

    pub(crate) fn set_send(&mut self, send: SendState) {
        self.send = send;
    }

    pub(crate) fn upload(&self) -> &UploadState {
        &self.upload
    }

    pub(crate) fn set_upload(&mut self, upload: UploadState) {
        self.upload = upload;
    }

    pub(crate) fn clear(&self) -> ClearState {
        self.clear
    }

    pub(crate) fn set_clear(&mut self, clear: ClearState) {
        self.clear = clear;
    }
}
