//! Storage providers and their per-variant dispatch data.
//!
//! The two chat services behave as one "chunk uploader" capability with two
//! variants; everything that differs between them (ceiling, timeout, endpoint
//! shape, response extraction) hangs off this enum rather than being duplicated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Chat service used as blob storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Discord,
    Telegram,
}

impl Provider {
    /// Ceiling for a single chunk, enforced at form-parse time before any
    /// cryptographic or network work.
    pub const fn max_chunk_bytes(self) -> usize {
        match self {
            Provider::Discord => 25 << 20,
            Provider::Telegram => 50 << 20,
        }
    }

    /// Outbound upload timeout. Telegram accepts larger payloads and gets the
    /// longer bound.
    pub const fn upload_timeout(self) -> Duration {
        match self {
            Provider::Discord => Duration::from_secs(20),
            Provider::Telegram => Duration::from_secs(120),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Discord => write!(f, "Discord"),
            Provider::Telegram => write!(f, "Telegram"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_wire_names() {
        let discord: Provider = serde_json::from_str("\"discord\"").unwrap();
        let telegram: Provider = serde_json::from_str("\"telegram\"").unwrap();
        assert_eq!(discord, Provider::Discord);
        assert_eq!(telegram, Provider::Telegram);
    }

    #[test]
    fn rejects_unknown_provider() {
        assert!(serde_json::from_str::<Provider>("\"dropbox\"").is_err());
    }

    #[test]
    fn ceilings_and_timeouts_per_provider() {
        assert_eq!(Provider::Discord.max_chunk_bytes(), 25 * 1024 * 1024);
        assert_eq!(Provider::Telegram.max_chunk_bytes(), 50 * 1024 * 1024);
        assert_eq!(Provider::Discord.upload_timeout(), Duration::from_secs(20));
        assert_eq!(Provider::Telegram.upload_timeout(), Duration::from_secs(120));
    }
}
