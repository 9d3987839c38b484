//! Test helpers: build the router with a real or redirected chunk store.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use chunkstash_api::setup::routes::build_router;
use chunkstash_api::state::AppState;
use chunkstash_storage::ChunkStore;
use std::sync::Arc;

pub fn test_server() -> TestServer {
    let state = Arc::new(AppState::new().expect("state"));
    TestServer::new(build_router(state)).expect("test server")
}

/// Server whose provider adapters point at fake API bases.
pub fn test_server_with_store(store: ChunkStore) -> TestServer {
    let state = Arc::new(AppState::with_store(store));
    TestServer::new(build_router(state)).expect("test server")
}

/// Base64 of a fixed 32-byte key.
pub fn test_key_base64() -> String {
    use base64::{engine::general_purpose, Engine as _};
    general_purpose::STANDARD.encode(b"01234567890123456789012345678901")
}

/// Base64 of key material with the wrong length (16 bytes).
pub fn short_key_base64() -> String {
    use base64::{engine::general_purpose, Engine as _};
    general_purpose::STANDARD.encode([0u8; 16])
}

/// A complete chunk upload form.
pub fn chunk_form(key_base64: &str, payload: &[u8]) -> MultipartForm {
    MultipartForm::new()
        .add_text("keyBase64", key_base64)
        .add_text("fileName", "report.pdf")
        .add_text("chunkIndex", "0")
        .add_part(
            "chunkData",
            Part::bytes(bytes::Bytes::from(payload.to_vec())).file_name("report.pdf"),
        )
}
