//! Provider adapter errors.
//!
//! Every failure here is terminal for its request; the API layer converts
//! these into `AppError` (all map to 500, with the cause text preserved).

use chunkstash_core::Provider;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Non-success status from a provider API, body included for diagnosis.
    #[error("{provider} API error {status}: {body}")]
    Upstream {
        provider: Provider,
        status: u16,
        body: String,
    },

    /// Non-200 from a resolved download URL.
    #[error("Remote server error: {0}")]
    RemoteStatus(u16),

    #[error("Telegram bot token invalid or expired. Please check TELEGRAM_BOT_TOKEN")]
    CredentialRejected,

    #[error("Telegram bot lacks permissions or chat not found. Check TELEGRAM_CHAT_ID")]
    PermissionDenied,

    #[error("Telegram rate limit exceeded. Please wait and try again")]
    RateLimited,

    /// HTTP 200 but `ok: false` in the Telegram payload.
    #[error("Telegram API error: {0}")]
    Rejected(String),

    /// Successful response missing the field the locator comes from.
    #[error("{0}")]
    MissingField(&'static str),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse {provider} response: {detail}")]
    Decode { provider: Provider, detail: String },
}

/// Result type for provider operations
pub type StorageResult<T> = Result<T, StorageError>;
