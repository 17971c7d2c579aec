//! `spectech` host: serves the server-rendered rental catalog.

#![recursion_limit = "256"]

mod config;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("fixed catalog is invalid: {0}")]
    Catalog(#[from] fleet::CatalogError),
    #[error("{0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "spectech stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let catalog = fleet::Catalog::check_standard()?;
    tracing::info!(records = catalog.len(), "catalog loaded");

    if config.map.has_credential() {
        tracing::info!(lang = %config.map.lang, zoom = config.map.zoom, "map credential configured");
    } else {
        tracing::warn!("MAP_API_KEY not set; the map view will show a degraded region");
    }

    let live_tracking = config.map.live_tracking;
    let local_filter = config.map.local_filter;
    let app = routes::app(config.map).map_err(HostError::Leptos)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, live_tracking, local_filter, "spectech listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
