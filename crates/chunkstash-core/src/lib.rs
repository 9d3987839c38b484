//! chunkstash core: errors, configuration, chunk encryption, provider model.
//!
//! Nothing in this crate holds state across requests; configuration is read
//! from the process environment on every use and the cipher lives for a single
//! upload.

pub mod config;
pub mod encryption;
pub mod error;
pub mod provider;

// Re-export commonly used types
pub use config::{mask_secret, DiscordConfig, PublicConfig, TelegramConfig};
pub use encryption::{decode_key_base64, ChunkCipher, KEY_LEN, NONCE_LEN};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use provider::Provider;
