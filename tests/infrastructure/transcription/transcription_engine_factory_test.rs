use vidagent::application::ports::TranscriptionError;
use vidagent::infrastructure::transcription::{TranscriptionEngineFactory, TranscriptionProvider};

#[test]
fn given_api_key_when_creating_groq_engine_then_returns_engine() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::Groq,
        Some("test-key".to_string()),
        None,
        None,
    );

    assert!(result.is_ok());
}

#[test]
fn given_no_api_key_when_creating_groq_engine_then_names_groq_env_var() {
    let result =
        TranscriptionEngineFactory::create(TranscriptionProvider::Groq, None, None, None);

    assert!(matches!(
        result,
        Err(TranscriptionError::MissingApiKey("GROQ_API_KEY"))
    ));
}

#[test]
fn given_no_api_key_when_creating_openai_engine_then_names_openai_env_var() {
    let result =
        TranscriptionEngineFactory::create(TranscriptionProvider::OpenAi, None, None, None);

    assert!(matches!(
        result,
        Err(TranscriptionError::MissingApiKey("OPENAI_API_KEY"))
    ));
}

#[test]
fn given_empty_api_key_when_creating_engine_then_missing_key_error() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::Groq,
        Some(String::new()),
        None,
        None,
    );

    assert!(matches!(result, Err(TranscriptionError::MissingApiKey(_))));
}
