//! Shared application state.
//!
//! Only immutable plumbing lives here (the outbound HTTP client pool inside
//! `ChunkStore`); there is no cache, counter, or lock shared between requests.
//! Provider credentials are deliberately NOT part of the state - they are read
//! from the environment on every request.

use anyhow::Result;
use chunkstash_storage::ChunkStore;

pub struct AppState {
    pub store: ChunkStore,
}

impl AppState {
    pub fn new() -> Result<Self> {
        Ok(Self {
            store: ChunkStore::new()?,
        })
    }

    /// Build state around a preconfigured store (tests point it at fake
    /// provider servers).
    pub fn with_store(store: ChunkStore) -> Self {
        Self { store }
    }
}
