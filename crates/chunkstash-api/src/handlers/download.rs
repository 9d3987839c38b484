//! Download proxy: resolve a locator, stream the encrypted bytes back.
//!
//! The key never reaches this endpoint; decryption is the client's job. The
//! body passes through byte-for-byte.

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Response;
use chunkstash_core::{config, AppError, Provider};
use futures::StreamExt;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DownloadRequest {
    /// Locator from a previous upload: an attachment URL (discord) or a
    /// `file_id` (telegram).
    pub url: String,
    pub provider: Provider,
}

#[utoipa::path(
    post,
    path = "/api/download",
    tag = "download",
    responses(
        (status = 200, description = "Raw encrypted chunk bytes", content_type = "application/octet-stream"),
        (status = 400, description = "Invalid JSON"),
        (status = 500, description = "Locator resolution or remote fetch failure")
    )
)]
pub async fn download_chunk(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<DownloadRequest>,
) -> Result<Response, HttpAppError> {
    // The resolved Telegram URL embeds the bot token; neither branch logs it.
    let target_url = match request.provider {
        Provider::Discord => request.url.clone(),
        Provider::Telegram => {
            let token = config::telegram_bot_token().ok_or_else(|| {
                AppError::Internal("TELEGRAM_BOT_TOKEN missing in env".to_string())
            })?;
            state.store.telegram_file_url(&token, &request.url).await?
        }
    };

    tracing::info!(provider = %request.provider, "Proxying chunk download");

    let stream = state
        .store
        .fetch_chunk(&target_url, request.provider)
        .await?;

    let body_stream =
        stream.map(|result| result.map_err(|e| std::io::Error::other(format!("Stream error: {}", e))));

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .body(Body::from_stream(body_stream))
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(response)
}
