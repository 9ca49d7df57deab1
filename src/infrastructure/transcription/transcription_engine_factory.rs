use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::whisper_api_engine::WhisperApiEngine;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const GROQ_DEFAULT_MODEL: &str = "whisper-large-v3";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const OPENAI_DEFAULT_MODEL: &str = "whisper-1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProvider {
    Groq,
    OpenAi,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// Builds the engine for a provider, filling in that provider's default
    /// base url and model where none is configured.
    pub fn create(
        provider: TranscriptionProvider,
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let key_var = match provider {
            TranscriptionProvider::Groq => "GROQ_API_KEY",
            TranscriptionProvider::OpenAi => "OPENAI_API_KEY",
        };
        let key = api_key
            .filter(|k| !k.is_empty())
            .ok_or(TranscriptionError::MissingApiKey(key_var))?;

        let (default_url, default_model) = match provider {
            TranscriptionProvider::Groq => (GROQ_BASE_URL, GROQ_DEFAULT_MODEL),
            TranscriptionProvider::OpenAi => (OPENAI_BASE_URL, OPENAI_DEFAULT_MODEL),
        };

        let engine = WhisperApiEngine::new(
            key,
            base_url.unwrap_or_else(|| default_url.to_string()),
            model.unwrap_or_else(|| default_model.to_string()),
        );

        Ok(Arc::new(engine))
    }
}
