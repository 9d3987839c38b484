//! Download proxy request validation and failure mapping.
//!
//! Run with: `cargo test -p chunkstash-api --test download_test`

mod helpers;

use axum::http::StatusCode;
use helpers::test_server;
use serde_json::json;

#[tokio::test]
async fn invalid_json_is_400() {
    let server = test_server();

    let response = server
        .post("/api/download")
        .add_header("Content-Type", "application/json")
        .bytes("{ not json".into())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Invalid JSON");
}

#[tokio::test]
async fn unknown_provider_is_400() {
    let server = test_server();

    let response = server
        .post("/api/download")
        .json(&json!({"url": "x", "provider": "dropbox"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_fields_are_400() {
    let server = test_server();

    let response = server
        .post("/api/download")
        .json(&json!({"provider": "discord"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn telegram_download_without_token_is_500() {
    // Unlike uploads, a missing token at download time is a 500, not a 503.
    std::env::remove_var("TELEGRAM_BOT_TOKEN");

    let server = test_server();

    let response = server
        .post("/api/download")
        .json(&json!({"url": "FILE42", "provider": "telegram"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unreachable_remote_is_500_without_retry() {
    let server = test_server();

    let response = server
        .post("/api/download")
        .json(&json!({"url": "http://127.0.0.1:9/blob/nope", "provider": "discord"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
