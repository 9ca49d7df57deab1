use std::sync::Arc;

use crate::application::ports::{CompletionClient, CompletionError};
use crate::domain::{Analysis, Intent, Transcript};

const SEARCH_URL_PREFIX: &str = "https://www.duckduckgo.com/?q=";
const UNKNOWN_QUERY_REPLY: &str = "Sorry, I couldn't understand the query.";

/// Classifies a free-text query against a transcript and dispatches it to
/// the matching action.
pub struct QueryRouter<C>
where
    C: CompletionClient,
{
    completion_client: Arc<C>,
}

impl<C> QueryRouter<C>
where
    C: CompletionClient,
{
    pub fn new(completion_client: Arc<C>) -> Self {
        Self { completion_client }
    }

    /// Routes a query to exactly one intent.
    ///
    /// Only the summary branch leaves the process; web-search and fact-check
    /// build a search link locally, and an unclassifiable query gets a fixed
    /// fallback reply.
    pub async fn route(
        &self,
        transcript: &Transcript,
        query: &str,
    ) -> Result<Analysis, RoutingError> {
        let intent = Intent::classify(query);
        tracing::debug!(intent = intent.as_str(), "Query classified");

        let result = match intent {
            Intent::Summary => self.summarize(transcript, query).await?,
            Intent::WebSearch | Intent::FactCheck => search_url(query),
            Intent::Unknown => UNKNOWN_QUERY_REPLY.to_string(),
        };

        Ok(Analysis::new(intent, result))
    }

    async fn summarize(
        &self,
        transcript: &Transcript,
        query: &str,
    ) -> Result<String, RoutingError> {
        let prompt = summary_prompt(transcript, query);

        match self.completion_client.complete(&prompt).await {
            Ok(text) => Ok(text),
            // An upstream non-success reply becomes the result text, status
            // code and body verbatim; the routed request itself succeeds.
            Err(CompletionError::Upstream { status, body }) => {
                tracing::warn!(status = status, "Completion API returned an error status");
                Ok(format!("Completion API error: {} - {}", status, body))
            }
            Err(e) => Err(RoutingError::Completion(e)),
        }
    }
}

fn summary_prompt(transcript: &Transcript, query: &str) -> String {
    format!(
        "Here is the transcript of a video:\n\n{}\n\nNow respond to the following request:\n{}",
        transcript.as_str(),
        query
    )
}

// Fact-check and web-search build the same link. The query is templated
// raw, without encoding.
fn search_url(query: &str) -> String {
    format!("{}{}", SEARCH_URL_PREFIX, query)
}

#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("completion: {0}")]
    Completion(#[from] CompletionError),
}
