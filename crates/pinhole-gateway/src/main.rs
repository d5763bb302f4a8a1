use clap::Parser;
use pinhole_gateway::cli::CLI;
use pinhole_gateway::{App, AppState};
use pinhole_shortener::ShortenerService;
use pinhole_storage::InMemoryRepository;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;
    pinhole_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        code_length = config.code_length,
        max_attempts = ?config.max_attempts,
        resolve_mode = %config.resolve_mode,
        "starting gateway server"
    );

    let shortener =
        ShortenerService::with_settings(InMemoryRepository::new(), config.shortener_settings())?;
    let state = AppState::new(Arc::new(shortener), config.base_url, config.resolve_mode);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}
