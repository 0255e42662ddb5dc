// Receipt Points - Web Server

use anyhow::{Context, Result};
use clap::Parser;
use receipt_points::api::{router, AppState};
use receipt_points::config::ServerArgs;
use receipt_points::logging::init_logging;
use receipt_points::InMemoryReceiptStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    init_logging(args.log_format)?;

    let state = AppState::new(Arc::new(InMemoryReceiptStore::new()));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", args.bind))?;

    tracing::info!(
        addr = %args.bind,
        version = receipt_points::VERSION,
        "Receipt server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server exited with an error")?;

    tracing::info!("Receipt server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
    }
}
