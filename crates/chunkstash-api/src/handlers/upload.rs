//! Chunk upload handlers: encrypt-then-forward.
//!
//! Order matters and mirrors the wire contract: credentials are checked
//! before the form is parsed (503 beats 400), and the key is validated before
//! any cipher construction or network call.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chunkstash_core::{AppError, ChunkCipher, DiscordConfig, Provider, TelegramConfig};
use chunkstash_storage::UploadTarget;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UploadResponse {
    /// Discord: a directly fetchable attachment URL. Telegram: an opaque
    /// `file_id` the download endpoint resolves. Callers must remember which
    /// provider produced it.
    pub link: String,
}

struct ChunkForm {
    key_base64: String,
    file_name: String,
    chunk_index: Option<String>,
    data: Vec<u8>,
}

/// Pull the chunk fields out of the multipart body. Unknown fields are
/// ignored; missing required ones map to terse client errors.
async fn read_chunk_form(
    mut multipart: Multipart,
    max_chunk_bytes: usize,
) -> Result<ChunkForm, AppError> {
    let mut key_base64: Option<String> = None;
    let mut file_name: Option<String> = None;
    let mut chunk_index: Option<String> = None;
    let mut data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Parse form failed: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        match name.as_str() {
            "keyBase64" => {
                key_base64 = Some(field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Parse form failed: {}", e))
                })?);
            }
            "fileName" => {
                file_name = Some(field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Parse form failed: {}", e))
                })?);
            }
            "chunkIndex" => {
                chunk_index = Some(field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Parse form failed: {}", e))
                })?);
            }
            "chunkData" => {
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Parse form failed: {}", e))
                })?;
                data = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let key_base64 = key_base64.filter(|v| !v.is_empty());
    let file_name = file_name.filter(|v| !v.is_empty());
    let (key_base64, file_name) = match (key_base64, file_name) {
        (Some(key), Some(name)) => (key, name),
        _ => {
            return Err(AppError::InvalidInput(
                "Missing required fields".to_string(),
            ))
        }
    };

    let data = data.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;
    if data.len() > max_chunk_bytes {
        return Err(AppError::InvalidInput(format!(
            "Chunk exceeds {} MB limit",
            max_chunk_bytes >> 20
        )));
    }

    Ok(ChunkForm {
        key_base64,
        file_name,
        chunk_index,
        data,
    })
}

async fn handle_upload(
    state: &AppState,
    target: UploadTarget,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let provider = target.provider();

    let form = read_chunk_form(multipart, provider.max_chunk_bytes()).await?;
    tracing::debug!(
        provider = %provider,
        file_name = %form.file_name,
        chunk_index = form.chunk_index.as_deref().unwrap_or(""),
        size = form.data.len(),
        "Chunk form parsed"
    );

    // Key validation happens here, before any cipher init or network call.
    let cipher = ChunkCipher::from_key_base64(&form.key_base64)?;
    let envelope = cipher.seal(&form.data)?;
    tracing::debug!(provider = %provider, encrypted_len = envelope.len(), "Chunk encrypted");

    let link = state
        .store
        .upload_chunk(&target, &form.file_name, envelope)
        .await
        .map_err(|e| HttpAppError::upload(provider, e))?;

    tracing::info!(provider = %provider, "Chunk uploaded");
    Ok(Json(UploadResponse { link }))
}

#[utoipa::path(
    post,
    path = "/api/discord",
    tag = "upload",
    responses(
        (status = 200, description = "Chunk encrypted and stored as a Discord attachment", body = UploadResponse),
        (status = 400, description = "Missing fields, invalid key, or unparsable form"),
        (status = 503, description = "Discord credentials not configured"),
        (status = 500, description = "Provider or network failure")
    )
)]
pub async fn discord_upload(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    tracing::info!("Discord upload handler started");

    let config = DiscordConfig::from_env()
        .ok_or_else(|| AppError::NotConfigured("Discord not configured".to_string()))?;

    handle_upload(&state, UploadTarget::Discord(config), multipart).await
}

#[utoipa::path(
    post,
    path = "/api/telegram",
    tag = "upload",
    responses(
        (status = 200, description = "Chunk encrypted and stored as a Telegram document", body = UploadResponse),
        (status = 400, description = "Missing fields, invalid key, or unparsable form"),
        (status = 503, description = "Telegram credentials not configured"),
        (status = 500, description = "Provider or network failure (401/403/429 causes named)")
    )
)]
pub async fn telegram_upload(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    tracing::info!("Telegram upload handler started");

    let config = TelegramConfig::from_env().ok_or_else(|| {
        AppError::NotConfigured(
            "Telegram not configured - missing environment variables".to_string(),
        )
    })?;

    handle_upload(&state, UploadTarget::Telegram(config), multipart).await
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    responses(
        (status = 400, description = "Always: callers must pick a provider endpoint")
    )
)]
pub async fn generic_upload() -> impl IntoResponse {
    tracing::debug!("Generic upload endpoint hit");
    (
        StatusCode::BAD_REQUEST,
        "Use /api/discord or /api/telegram endpoints",
    )
}
