mod completion_client;
mod transcription_engine;

pub use completion_client::{CompletionClient, CompletionError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
