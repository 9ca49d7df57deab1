use async_trait::async_trait;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The completion API answered with a non-success status.
    #[error("status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("api request failed: {0}")]
    Request(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
