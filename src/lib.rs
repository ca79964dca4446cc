//! Web API and view state for browsing an S3-compatible object store.
//!
//! - `store`: the object store seam and its S3 and in-memory backends
//! - `api`: JSON endpoints for buckets, listings and download links
//! - `client`: browser-side access to those endpoints
//! - `views`: bucket list and bucket detail page state

pub mod api;
pub mod client;
pub mod config;
pub mod store;
pub mod views;

use anyhow::Context;
use log::info;
use std::sync::Arc;

pub use config::AppConfig;

/// Serve the HTTP API against the configured object store until Ctrl-C
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let store = store::S3Store::new(&config.s3_client_config());
    let app = api::router(api::AppState::new(Arc::new(store)));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!(
        "HTTP API listening on {} (object store {}, region {})",
        config.bind, config.endpoint, config.region
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
