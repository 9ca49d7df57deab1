use async_trait::async_trait;

use crate::domain::{MediaFile, Transcript};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        data: &[u8],
        media: &MediaFile,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("unsupported media: {0}")]
    UnsupportedMedia(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("missing api key: set {0}")]
    MissingApiKey(&'static str),
}
