//! # polis-api: Binary Entry Point
//!
//! Parses configuration, initializes tracing and the Prometheus recorder,
//! and serves the API until interrupted.

use anyhow::Context;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

use polis_api::config::{AppConfig, Environment, ServerArgs};
use polis_api::state::AppState;

/// Structured logging: JSON lines in production, human-readable otherwise.
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug);

    match config.environment {
        Environment::Production => builder.json().init(),
        Environment::Development => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerArgs::parse().into_config();
    init_tracing(&config);
    tracing::info!(
        environment = config.environment.as_str(),
        debug = config.debug,
        "starting Insurance API"
    );

    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .context("failed to install Prometheus recorder")?;
    polis_api::middleware::metrics::describe();

    let addr = config.socket_addr();
    let state = AppState::with_config(config).with_metrics(metrics);
    let app = polis_api::app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Insurance API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
