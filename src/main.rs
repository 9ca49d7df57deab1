use std::sync::Arc;

use tokio::net::TcpListener;

use vidagent::application::services::QueryRouter;
use vidagent::infrastructure::llm::GroqClient;
use vidagent::infrastructure::observability::init_tracing;
use vidagent::infrastructure::transcription::{TranscriptionEngineFactory, TranscriptionProvider};
use vidagent::presentation::{AppState, Settings, TranscriptionProviderSetting, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    let settings = Settings::from_env()?;
    init_tracing(&settings.logging, settings.server.port);

    let provider = match settings.transcription.provider {
        TranscriptionProviderSetting::Groq => TranscriptionProvider::Groq,
        TranscriptionProviderSetting::OpenAi => TranscriptionProvider::OpenAi,
    };
    let transcription_engine = TranscriptionEngineFactory::create(
        provider,
        settings.transcription.api_key,
        settings.transcription.model,
        settings.transcription.base_url,
    )?;

    let completion_api_key = settings
        .completion
        .api_key
        .ok_or_else(|| anyhow::anyhow!("GROQ_API_KEY is required for the completion client"))?;
    let completion_client = Arc::new(GroqClient::new(
        completion_api_key,
        settings.completion.model,
        settings.completion.temperature,
        settings.completion.base_url,
    ));
    let query_router = Arc::new(QueryRouter::new(completion_client));

    let state = AppState {
        transcription_engine,
        query_router,
    };
    let router = create_router(state, settings.server.max_upload_mb);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
