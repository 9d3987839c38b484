//! The chunk store: one capability, two provider variants.

use crate::error::StorageResult;
use crate::{discord, download, telegram};
use bytes::Bytes;
use chunkstash_core::{DiscordConfig, Provider, TelegramConfig};
use futures::Stream;

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Where an encrypted chunk goes, with the credentials for that variant.
#[derive(Debug, Clone)]
pub enum UploadTarget {
    Discord(DiscordConfig),
    Telegram(TelegramConfig),
}

impl UploadTarget {
    pub fn provider(&self) -> Provider {
        match self {
            UploadTarget::Discord(_) => Provider::Discord,
            UploadTarget::Telegram(_) => Provider::Telegram,
        }
    }
}

/// Shared HTTP client plus provider endpoints. Holds no per-request state;
/// timeouts are applied per call since each provider gets a different bound.
#[derive(Clone)]
pub struct ChunkStore {
    http: reqwest::Client,
    discord_api_base: String,
    telegram_api_base: String,
}

impl ChunkStore {
    pub fn new() -> StorageResult<Self> {
        Self::with_api_bases(DISCORD_API_BASE, TELEGRAM_API_BASE)
    }

    /// Point the adapters at non-default API bases (used by tests to stand in
    /// fake providers).
    pub fn with_api_bases(
        discord_api_base: impl Into<String>,
        telegram_api_base: impl Into<String>,
    ) -> StorageResult<Self> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            discord_api_base: discord_api_base.into(),
            telegram_api_base: telegram_api_base.into(),
        })
    }

    /// Forward an encrypted chunk to the target provider; returns the locator
    /// (a fetchable URL for Discord, an opaque `file_id` for Telegram).
    pub async fn upload_chunk(
        &self,
        target: &UploadTarget,
        file_name: &str,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        match target {
            UploadTarget::Discord(config) => {
                discord::upload(&self.http, &self.discord_api_base, config, file_name, data).await
            }
            UploadTarget::Telegram(config) => {
                telegram::upload(&self.http, &self.telegram_api_base, config, file_name, data).await
            }
        }
    }

    /// Resolve a Telegram `file_id` into a fetchable URL. The result embeds
    /// the bot token and must not be logged.
    pub async fn telegram_file_url(
        &self,
        bot_token: &str,
        file_id: &str,
    ) -> StorageResult<String> {
        telegram::file_url(&self.http, &self.telegram_api_base, bot_token, file_id).await
    }

    /// Fetch a resolved URL, streaming the (still encrypted) body back.
    pub async fn fetch_chunk(
        &self,
        url: &str,
        provider: Provider,
    ) -> StorageResult<impl Stream<Item = Result<Bytes, crate::StorageError>> + Send + 'static>
    {
        download::fetch(&self.http, url, provider).await
    }
}
