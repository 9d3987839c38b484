//! Tracing initialization (console).

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize console tracing. Compact format (message string for
/// convenience); filter from `RUST_LOG` when set.
pub fn init_tracing() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "chunkstash_api=debug,chunkstash_storage=debug,chunkstash_core=debug,tower_http=debug".into()
                }),
        )
        .with(console_fmt)
        .init();
}
