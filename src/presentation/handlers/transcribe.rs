use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{CompletionClient, TranscriptionEngine};
use crate::domain::MediaFile;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<E, C>(
    State(state): State<AppState<E, C>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static + ?Sized,
    C: CompletionClient + 'static,
{
    let mut upload = None;

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

        if field.name() != Some("video") {
            continue;
        }

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

    let (media, data) = match upload {
        Some(u) => u,
        None => {
            tracing::warn!("Transcribe request with no video field");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No video uploaded".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(
        filename = %media.filename,
        mime = %media.mime,
        bytes = data.len(),
        "Video upload received"
    );

    match state.transcription_engine.transcribe(&data, &media).await {
        Ok(transcript) => {
            tracing::info!(chars = transcript.as_str().len(), "Transcription succeeded");
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    transcript: transcript.into_inner(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Transcription failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
