//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chunkstash_core::Provider;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Slack on top of the chunk ceiling for multipart framing and the text
/// fields riding along with the file part.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Setup all application routes
pub fn build_router(state: Arc<AppState>) -> Router {
    // Every endpoint is CORS-open; the browser client is served from a
    // different origin. Preflight OPTIONS is answered by this layer.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Server-level concurrency limit: every upload buffers up to the provider
    // ceiling in memory, so the deployment sizes this against available RAM.
    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000)
        .max(1);
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    Router::new()
        .route("/health", get(liveness_check))
        .route("/api/config", get(handlers::config::get_config))
        .route("/api/debug", get(handlers::debug::get_debug))
        .route(
            "/api/discord",
            post(handlers::upload::discord_upload).layer(DefaultBodyLimit::max(
                Provider::Discord.max_chunk_bytes() + MULTIPART_OVERHEAD_BYTES,
            )),
        )
        .route(
            "/api/telegram",
            post(handlers::upload::telegram_upload).layer(DefaultBodyLimit::max(
                Provider::Telegram.max_chunk_bytes() + MULTIPART_OVERHEAD_BYTES,
            )),
        )
        .route("/api/download", post(handlers::download::download_chunk))
        .route("/api/upload", post(handlers::upload::generic_upload))
        .route("/api/openapi.json", get(openapi_spec))
        .nest(
            "/docs",
            utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
                .path("/docs")
                .into(),
        )
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(RequestBodyLimitLayer::new(
            Provider::Telegram.max_chunk_bytes() + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe - process is running.
async fn liveness_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "alive" }))
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
