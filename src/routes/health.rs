// ABOUTME: Liveness and readiness route handlers for service monitoring
// ABOUTME: Returns a status string and an RFC 3339 timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create liveness and readiness routes
    pub fn routes() -> Router {
        Router::new()
            .route("/health/live", get(Self::handle_live))
            .route("/health/ready", get(Self::handle_ready))
    }

    async fn handle_live() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    // Stateless service: ready as soon as it is serving
    async fn handle_ready() -> Json<Value> {
        Json(json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
