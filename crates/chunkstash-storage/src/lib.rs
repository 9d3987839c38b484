//! chunkstash storage: chat-service provider adapters.
//!
//! Discord stores a chunk as a channel-message attachment (locator = the
//! attachment URL); Telegram stores it as a document (locator = `file_id`,
//! resolved through `getFile` before it is fetchable). That asymmetry is part
//! of the contract: callers track which provider produced a locator.

mod client;
mod discord;
mod download;
mod error;
mod filename;
mod telegram;

// Re-export commonly used types
pub use client::{ChunkStore, UploadTarget};
pub use error::{StorageError, StorageResult};
pub use filename::sanitize_file_name;
