// ABOUTME: Server binary for the body metrics HTTP API
// ABOUTME: Loads env configuration, applies CLI overrides, initializes logging and serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Body Metrics API Server Binary
//!
//! ```bash
//! HTTP_PORT=8080 METRICS_LOCALE=en bodymetrics-server
//! bodymetrics-server --host 127.0.0.1 --http-port 5001
//! ```

use anyhow::Result;
use bodymetrics_server::{config::ServerConfig, logging, server};
use clap::Parser;
use std::net::IpAddr;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "bodymetrics-server")]
#[command(about = "Body metrics API - BMI and BMR calculation over HTTP")]
struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<IpAddr>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting body metrics API");
    info!("{}", config.summary());

    if let Err(e) = server::run(&config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
