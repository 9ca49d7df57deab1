pub mod llm;
pub mod observability;
pub mod transcription;
