// crates/server/src/main.rs
//! HR Intelligence server binary.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use hr_intelligence_observability::init_tracing;
use hr_intelligence_server::{create_app, init_metrics, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env();
    let _log_guard = init_tracing(&config.log)?;

    init_metrics();

    if config.jwt_secret.is_none() {
        tracing::warn!(
            "HR_INTELLIGENCE_JWT_SECRET is not set; API authentication is disabled"
        );
    }

    let app = create_app(&config);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, version = env!("CARGO_PKG_VERSION"), "HR Intelligence API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
