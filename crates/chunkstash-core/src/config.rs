//! Configuration module
//!
//! Process-wide configuration, read fresh from the environment on each
//! request, with no caching and no startup validation. Missing provider
//! credentials surface as a 503 at upload time, never as a startup failure.

use serde::Serialize;
use std::env;

/// Read an environment variable, trimmed; empty string when unset or blank.
pub fn env_value(name: &str) -> String {
    env::var(name)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn required(name: &str) -> Option<String> {
    let value = env_value(name);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Discord bot credentials, required for the Discord upload path.
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub bot_token: String,
    pub channel_id: String,
}

impl DiscordConfig {
    pub fn from_env() -> Option<Self> {
        Some(Self {
            bot_token: required("DISCORD_BOT_TOKEN")?,
            channel_id: required("DISCORD_CHANNEL_ID")?,
        })
    }
}

/// Telegram bot credentials, required for the Telegram upload path.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

impl TelegramConfig {
    pub fn from_env() -> Option<Self> {
        Some(Self {
            bot_token: required("TELEGRAM_BOT_TOKEN")?,
            chat_id: required("TELEGRAM_CHAT_ID")?,
        })
    }
}

/// The download proxy only needs the bot token (no chat), so it reads just
/// that instead of requiring the full upload credentials.
pub fn telegram_bot_token() -> Option<String> {
    required("TELEGRAM_BOT_TOKEN")
}

/// Values exposed to the browser client via `/api/config`. Empty strings when
/// unset; the frontend handles missing config gracefully.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl PublicConfig {
    pub fn from_env() -> Self {
        Self {
            supabase_url: env_value("SUPABASE_URL"),
            supabase_anon_key: env_value("SUPABASE_ANON_KEY"),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
    }
}

/// Mask a credential for the debug endpoint: keep the first and last four
/// characters, never enough to reconstruct the value.
pub fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        return "[EMPTY]".to_string();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "[TOO_SHORT]".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
