// ABOUTME: Main library entry point for the body metrics API server
// ABOUTME: Wires configuration, logging, the metrics service and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Body Metrics Server
//!
//! HTTP API computing Body Mass Index and Basal Metabolic Rate.
//!
//! Requests go through three stages provided by `bodymetrics-intelligence`:
//! validation of the untyped fields, calculation, then classification into a
//! BMI category or per-activity calorie needs. This crate adds the service
//! composition, the axum routes, configuration and logging.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bodymetrics_server::{config::ServerConfig, logging, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     logging::init_from_env()?;
//!     server::run(&config).await
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Error types shared with the core crate
pub mod errors {
    pub use bodymetrics_core::errors::*;
}

/// Structured logging setup
pub mod logging;

/// HTTP routes and middleware
pub mod routes;

/// Server bind, serve and shutdown
pub mod server;

/// Validation, calculation and classification pipeline
pub mod services;
