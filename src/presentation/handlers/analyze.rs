use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{CompletionClient, TranscriptionEngine};
use crate::domain::{Intent, MediaFile};
use crate::infrastructure::observability::sanitize_query;
use crate::presentation::handlers::transcribe::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisBody,
}

#[derive(Serialize)]
pub struct AnalysisBody {
    #[serde(rename = "type")]
    pub intent: Intent,
    pub result: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<E, C>(
    State(state): State<AppState<E, C>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static + ?Sized,
    C: CompletionClient + 'static,
{
    let mut upload = None;
    let mut user_query = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        match field.name() {
            Some("video") => {
                let media = MediaFile::new(
                    field.file_name().unwrap_or("upload.mp4"),
                    field.content_type().unwrap_or("video/mp4"),
                );

                match field.bytes().await {
                    Ok(data) => upload = Some((media, data)),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read video bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read video: {}", e),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            Some("user_query") => match field.text().await {
                Ok(text) => user_query = Some(text),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read user_query field");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read user_query: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            _ => continue,
        }
    }

    let (media, data) = match upload {
        Some(u) => u,
        None => {
            tracing::warn!("Analyze request with no video field");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No video uploaded".to_string(),
                }),
            )
                .into_response();
        }
    };

    let user_query = match user_query {
        Some(q) => q,
        None => {
            tracing::warn!("Analyze request with no user_query field");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing user_query field".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(
        filename = %media.filename,
        bytes = data.len(),
        query = %sanitize_query(&user_query),
        "Analyze request received"
    );

    let transcript = match state.transcription_engine.transcribe(&data, &media).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Transcription failed: {}", e),
                }),
            )
                .into_response();
        }
    };

    match state.query_router.route(&transcript, &user_query).await {
        Ok(analysis) => {
            tracing::info!(intent = analysis.intent.as_str(), "Query routed");
            (
                StatusCode::OK,
                Json(AnalyzeResponse {
                    analysis: AnalysisBody {
                        intent: analysis.intent,
                        result: analysis.result,
                    },
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Query routing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Analysis failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
