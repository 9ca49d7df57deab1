mod transcription_engine_factory;
mod whisper_api_engine;

pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};
pub use whisper_api_engine::WhisperApiEngine;
