//! Telegram uploader and locator resolution.
//!
//! A chunk is sent as a document; the locator is the document's `file_id`,
//! which is not fetchable until resolved through `getFile`. Telegram wraps
//! every payload in an `ok`/`result` envelope, and HTTP 200 alone does not
//! mean success.

use crate::error::{StorageError, StorageResult};
use crate::filename::sanitize_file_name;
use chunkstash_core::{Provider, TelegramConfig};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

/// `getFile` shares the download proxy's bound so no outbound call is
/// unbounded.
const METADATA_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub(crate) ok: bool,
    pub(crate) description: Option<String>,
    pub(crate) result: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Message {
    pub(crate) document: Option<Document>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Document {
    pub(crate) file_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FileInfo {
    pub(crate) file_path: Option<String>,
}

/// Unwrap the `ok`/`result` envelope, surfacing `description` on rejection.
pub(crate) fn unwrap_ok<T>(response: ApiResponse<T>) -> StorageResult<T> {
    if !response.ok {
        return Err(StorageError::Rejected(
            response
                .description
                .unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }
    response
        .result
        .ok_or(StorageError::MissingField("No result in Telegram response"))
}

pub(crate) fn document_file_id(message: Message) -> StorageResult<String> {
    message
        .document
        .and_then(|document| document.file_id)
        .ok_or(StorageError::MissingField("No file_id in Telegram response"))
}

/// Map a non-200 status to its cause; 401/403/429 get specific messages.
pub(crate) fn map_status(status: u16, body: String) -> StorageError {
    match status {
        401 => StorageError::CredentialRejected,
        403 => StorageError::PermissionDenied,
        429 => StorageError::RateLimited,
        _ => StorageError::Upstream {
            provider: Provider::Telegram,
            status,
            body,
        },
    }
}

pub(crate) async fn upload(
    http: &reqwest::Client,
    api_base: &str,
    config: &TelegramConfig,
    file_name: &str,
    data: Vec<u8>,
) -> StorageResult<String> {
    let size = data.len();
    let url = format!("{}/bot{}/sendDocument", api_base, config.bot_token);

    let part = Part::bytes(data).file_name(format!("{}.bin", sanitize_file_name(file_name)));
    let form = Form::new()
        .text("chat_id", config.chat_id.clone())
        .part("document", part);

    let response = http
        .post(&url)
        .multipart(form)
        .timeout(Provider::Telegram.upload_timeout())
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;
    tracing::debug!(status, size, body = %body, "Telegram upload response");

    if status != 200 {
        return Err(map_status(status, body));
    }

    let api_response: ApiResponse<Message> =
        serde_json::from_str(&body).map_err(|e| StorageError::Decode {
            provider: Provider::Telegram,
            detail: e.to_string(),
        })?;

    document_file_id(unwrap_ok(api_response)?)
}

/// Resolve a `file_id` locator into a fetchable URL via `getFile`.
///
/// The returned URL embeds the bot token; callers must not log it.
pub(crate) async fn file_url(
    http: &reqwest::Client,
    api_base: &str,
    bot_token: &str,
    file_id: &str,
) -> StorageResult<String> {
    let url = format!("{}/bot{}/getFile", api_base, bot_token);

    let response = http
        .get(&url)
        .query(&[("file_id", file_id)])
        .timeout(METADATA_TIMEOUT)
        .send()
        .await?;

    let api_response: ApiResponse<FileInfo> =
        response.json().await.map_err(|e| StorageError::Decode {
            provider: Provider::Telegram,
            detail: e.to_string(),
        })?;

    let info = unwrap_ok(api_response)?;
    let file_path = info
        .file_path
        .ok_or(StorageError::MissingField("No file_path in Telegram response"))?;

    tracing::debug!(file_path = %file_path, "Resolved Telegram locator");
    Ok(format!("{}/file/bot{}/{}", api_base, bot_token, file_path))
}
