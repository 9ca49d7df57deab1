use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{MediaFile, Transcript};

/// Remote transcription over the OpenAI-compatible `audio/transcriptions`
/// endpoint. Groq and OpenAI both serve this wire format.
pub struct WhisperApiEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl WhisperApiEngine {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperApiEngine {
    async fn transcribe(
        &self,
        data: &[u8],
        media: &MediaFile,
    ) -> Result<Transcript, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(data.to_vec())
            .file_name(media.filename.clone())
            .mime_str(&media.mime)
            .map_err(|e| TranscriptionError::UnsupportedMedia(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(
            model = %self.model,
            filename = %media.filename,
            bytes = data.len(),
            "Sending media to transcription API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            // The API reports unreadable or unsupported media as 4xx.
            return Err(match status.as_u16() {
                400 | 415 | 422 => {
                    TranscriptionError::UnsupportedMedia(format!("status {}: {}", status, body))
                }
                _ => TranscriptionError::ApiRequestFailed(format!("status {}: {}", status, body)),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("body: {}", e)))?;

        tracing::info!(chars = text.len(), "Transcription completed");

        Ok(Transcript::new(text.trim()))
    }
}
