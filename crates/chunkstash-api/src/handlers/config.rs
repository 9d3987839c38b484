//! Public runtime configuration for the browser client.

use axum::Json;
use chunkstash_core::PublicConfig;

#[utoipa::path(
    get,
    path = "/api/config",
    tag = "config",
    responses(
        (status = 200, description = "Public client configuration; empty strings when unset", body = PublicConfig),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn get_config() -> Json<PublicConfig> {
    let config = PublicConfig::from_env();

    // No fallback values: the frontend handles missing config gracefully.
    if !config.is_configured() {
        tracing::warn!("Supabase environment variables not configured");
    }

    Json(config)
}
