//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers;
use chunkstash_core::{PublicConfig, Provider};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "chunkstash API",
        version = "0.1.0",
        description = "Stateless HTTP surface for storing client-encrypted chunks in chat services (Discord, Telegram) used as blob storage, and proxying them back still encrypted."
    ),
    paths(
        handlers::config::get_config,
        handlers::debug::get_debug,
        handlers::upload::discord_upload,
        handlers::upload::telegram_upload,
        handlers::upload::generic_upload,
        handlers::download::download_chunk,
    ),
    components(schemas(
        Provider,
        PublicConfig,
        handlers::debug::DebugInfo,
        handlers::upload::UploadResponse,
        handlers::download::DownloadRequest,
    )),
    tags(
        (name = "config", description = "Client configuration and deployment debugging"),
        (name = "upload", description = "Encrypt-and-forward chunk uploads"),
        (name = "download", description = "Encrypted chunk download proxy")
    )
)]
pub struct ApiDoc;
