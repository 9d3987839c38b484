//! Surface tests: CORS preflight, method gating, config and debug endpoints.
//!
//! Run with: `cargo test -p chunkstash-api --test routes_test`

mod helpers;

use axum::http::{Method, StatusCode};
use helpers::test_server;

#[tokio::test]
async fn preflight_returns_200_with_cors_headers() {
    let server = test_server();

    for path in ["/api/discord", "/api/telegram", "/api/download", "/api/upload"] {
        let response = server
            .method(Method::OPTIONS, path)
            .add_header("Origin", "http://localhost:5173")
            .add_header("Access-Control-Request-Method", "POST")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK, "preflight {}", path);
        assert!(response.text().is_empty(), "preflight body for {}", path);
        assert!(
            response
                .headers()
                .get("access-control-allow-origin")
                .is_some(),
            "missing CORS header for {}",
            path
        );
    }
}

#[tokio::test]
async fn wrong_methods_are_rejected() {
    let server = test_server();

    assert_eq!(
        server.get("/api/discord").await.status_code(),
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        server.get("/api/telegram").await.status_code(),
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        server.get("/api/download").await.status_code(),
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        server.post("/api/config").await.status_code(),
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        server.post("/api/debug").await.status_code(),
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn config_returns_string_values() {
    let server = test_server();

    let response = server.get("/api/config").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body["supabaseUrl"].is_string());
    assert!(body["supabaseAnonKey"].is_string());
}

#[tokio::test]
async fn debug_masks_every_credential() {
    let server = test_server();

    let response = server.get("/api/debug").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    for field in [
        "discord_bot_token",
        "discord_channel_id",
        "telegram_bot_token",
        "telegram_chat_id",
        "supabase_url",
        "supabase_anon_key",
    ] {
        let value = body
            .get(field)
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| panic!("missing field {}", field));
        // Whatever the environment holds, only a masked form may leave.
        let masked =
            value == "[EMPTY]" || value == "[TOO_SHORT]" || value.contains("...");
        assert!(masked, "{} leaked: {}", field, value);
    }

    // Allocated but never populated; the raw environment must not leak.
    assert_eq!(body.get("all_env_vars"), Some(&serde_json::json!({})));
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let server = test_server();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "alive");

    let response = server.get("/api/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
