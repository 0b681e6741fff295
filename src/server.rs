// ABOUTME: HTTP server startup binding the configured address and serving the router
// ABOUTME: Stops accepting connections on Ctrl-C or SIGTERM and drains in-flight requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::routes;
use anyhow::{Context, Result};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(config: &ServerConfig) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    serve(listener, config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` completes
///
/// # Errors
///
/// Returns an error if the server fails
pub async fn serve<F>(listener: TcpListener, config: &ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = routes::router(config);
    let local_addr = listener.local_addr().context("listener has no local address")?;

    info!(
        "Body metrics API listening on http://{local_addr} (environment: {})",
        config.environment
    );
    info!("   BMI:            POST http://{local_addr}/health/bmi");
    info!("   BMI assessment: POST http://{local_addr}/health/bmi/assessment");
    info!("   BMR:            POST http://{local_addr}/health/bmr");
    info!("   Liveness:       GET  http://{local_addr}/health/live");
    info!("   Readiness:      GET  http://{local_addr}/health/ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("error running HTTP server")?;

    info!("Body metrics API stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where supported
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
