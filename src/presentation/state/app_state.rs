use std::sync::Arc;

use crate::application::ports::{CompletionClient, TranscriptionEngine};
use crate::application::services::QueryRouter;

pub struct AppState<E, C>
where
    E: TranscriptionEngine + ?Sized,
    C: CompletionClient,
{
    pub transcription_engine: Arc<E>,
    pub query_router: Arc<QueryRouter<C>>,
}

impl<E, C> Clone for AppState<E, C>
where
    E: TranscriptionEngine + ?Sized,
    C: CompletionClient,
{
    fn clone(&self) -> Self {
        Self {
            transcription_engine: Arc::clone(&self.transcription_engine),
            query_router: Arc::clone(&self.query_router),
        }
    }
}
