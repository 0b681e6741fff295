// ABOUTME: Route module organization for the body metrics HTTP endpoints
// ABOUTME: Assembles domain routers with body limit, request id and tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the service layer. [`router`] wires them together with the
//! shared middleware stack.

/// Liveness and readiness routes
pub mod health;
/// BMI and BMR routes
pub mod metrics;
/// Request body extractor
pub mod payload;

pub use health::HealthRoutes;
pub use metrics::{BmiResponse, BmrResponse, MetricsRoutes};
pub use payload::MetricsPayload;

use crate::config::ServerConfig;
use crate::logging::REQUEST_ID_HEADER;
use crate::services::HealthMetricsService;
use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Request},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use uuid::Uuid;

/// Generates a UUID v4 for requests that arrive without an `x-request-id`
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build the application router
pub fn router(config: &ServerConfig) -> Router {
    let service = HealthMetricsService::from_config(&config.metrics);
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(MetricsRoutes::routes(service))
        .merge(HealthRoutes::routes())
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), UuidRequestId))
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|value| value.to_str().ok())
                            .unwrap_or_default();
                        info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    }),
                )
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
}
