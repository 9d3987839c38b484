use chunkstash_api::state::AppState;
use chunkstash_api::{setup, telemetry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    // Provider credentials are deliberately not validated here: they are read
    // per request, and their absence is a 503 at upload time.
    let state = Arc::new(AppState::new()?);
    let app = setup::routes::build_router(state);

    setup::server::start_server(app).await?;

    Ok(())
}
