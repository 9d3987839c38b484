//! Masked credential summary for deployment debugging.
//!
//! Values are reduced to `first4...last4` before they leave the process;
//! lengths go to the log so a misconfigured deployment can be diagnosed
//! without exposing a secret.

use axum::Json;
use chunkstash_core::config::{env_value, mask_secret};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DebugInfo {
    pub discord_bot_token: String,
    pub discord_channel_id: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub all_env_vars: BTreeMap<String, String>,
}

#[utoipa::path(
    get,
    path = "/api/debug",
    tag = "config",
    responses(
        (status = 200, description = "Masked credential summary", body = DebugInfo),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn get_debug() -> Json<DebugInfo> {
    let discord_token = env_value("DISCORD_BOT_TOKEN");
    let discord_channel = env_value("DISCORD_CHANNEL_ID");
    let telegram_token = env_value("TELEGRAM_BOT_TOKEN");
    let telegram_chat = env_value("TELEGRAM_CHAT_ID");
    let supabase_url = env_value("SUPABASE_URL");
    let supabase_key = env_value("SUPABASE_ANON_KEY");

    tracing::debug!(
        discord_bot_token_len = discord_token.len(),
        discord_channel_id_len = discord_channel.len(),
        telegram_bot_token_len = telegram_token.len(),
        telegram_chat_id_len = telegram_chat.len(),
        supabase_url_len = supabase_url.len(),
        supabase_anon_key_len = supabase_key.len(),
        "Environment variable summary"
    );

    Json(DebugInfo {
        discord_bot_token: mask_secret(&discord_token),
        discord_channel_id: mask_secret(&discord_channel),
        telegram_bot_token: mask_secret(&telegram_token),
        telegram_chat_id: mask_secret(&telegram_chat),
        supabase_url: mask_secret(&supabase_url),
        supabase_anon_key: mask_secret(&supabase_key),
        all_env_vars: BTreeMap::new(),
    })
}
