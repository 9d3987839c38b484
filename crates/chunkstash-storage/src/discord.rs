//! Discord uploader: a chunk becomes a channel-message attachment.
//!
//! The returned locator is the attachment URL, directly fetchable by the
//! download proxy.

use crate::error::{StorageError, StorageResult};
use crate::filename::sanitize_file_name;
use chunkstash_core::{DiscordConfig, Provider};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    pub(crate) attachments: Vec<Attachment>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Attachment {
    pub(crate) url: Option<String>,
}

/// First attachment's URL; Discord returning 200 without one is its own error.
pub(crate) fn attachment_url(message: MessageResponse) -> StorageResult<String> {
    message
        .attachments
        .into_iter()
        .next()
        .and_then(|attachment| attachment.url)
        .ok_or(StorageError::MissingField("No attachment URL in response"))
}

pub(crate) async fn upload(
    http: &reqwest::Client,
    api_base: &str,
    config: &DiscordConfig,
    file_name: &str,
    data: Vec<u8>,
) -> StorageResult<String> {
    let size = data.len();
    let url = format!("{}/channels/{}/messages", api_base, config.channel_id);

    let part = Part::bytes(data).file_name(format!("{}.bin", sanitize_file_name(file_name)));
    let form = Form::new().part("files[0]", part);

    let response = http
        .post(&url)
        .header(AUTHORIZATION, format!("Bot {}", config.bot_token))
        .multipart(form)
        .timeout(Provider::Discord.upload_timeout())
        .send()
        .await?;

    let status = response.status();
    tracing::debug!(status = status.as_u16(), size, "Discord upload response");

    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(StorageError::Upstream {
            provider: Provider::Discord,
            status: status.as_u16(),
            body,
        });
    }

    let message: MessageResponse = response.json().await.map_err(|e| StorageError::Decode {
        provider: Provider::Discord,
        detail: e.to_string(),
    })?;

    attachment_url(message)
}
