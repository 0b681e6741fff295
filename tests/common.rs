// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and router construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `bodymetrics_server`

use axum::Router;
use bodymetrics_core::models::Locale;
use bodymetrics_intelligence::{CalorieBasis, RawFields};
use bodymetrics_server::config::{MetricsConfig, ServerConfig};
use bodymetrics_server::routes;
use bodymetrics_server::services::HealthMetricsService;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Default test configuration
pub fn test_config() -> ServerConfig {
    ServerConfig::default()
}

/// Router built from the default configuration
pub fn test_router() -> Router {
    init_test_logging();
    routes::router(&test_config())
}

/// Router with explicit pipeline settings
pub fn router_with(locale: Locale, calorie_basis: CalorieBasis) -> Router {
    init_test_logging();
    let config = ServerConfig {
        metrics: MetricsConfig {
            locale,
            calorie_basis,
        },
        ..ServerConfig::default()
    };
    routes::router(&config)
}

/// Default pipeline service
pub fn service() -> HealthMetricsService {
    init_test_logging();
    HealthMetricsService::default()
}

/// Wrap a JSON literal as request fields
pub fn fields(value: serde_json::Value) -> RawFields {
    RawFields::from_json(value)
}
