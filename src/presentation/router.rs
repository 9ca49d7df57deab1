use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{CompletionClient, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{analyze_handler, health_handler, transcribe_handler};
use crate::presentation::state::AppState;

pub fn create_router<E, C>(state: AppState<E, C>, max_upload_mb: usize) -> Router
where
    E: TranscriptionEngine + 'static + ?Sized,
    C: CompletionClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/transcribe", post(transcribe_handler::<E, C>))
        .route("/analyze", post(analyze_handler::<E, C>))
        .layer(DefaultBodyLimit::max(max_upload_mb * 1024 * 1024))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
