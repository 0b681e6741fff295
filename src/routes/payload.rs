// ABOUTME: Request body extractor yielding untyped metric fields
// ABOUTME: Accepts JSON or form-urlencoded bodies; anything unusable carries no fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use bodymetrics_core::errors::ErrorResponse;
use bodymetrics_intelligence::RawFields;
use tracing::debug;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Metric fields taken from the request body
///
/// Form bodies yield string values, JSON bodies keep their types. Empty,
/// malformed and non-object JSON bodies produce no fields so the validator
/// reports "no data provided". A number serde cannot hold as `f64`
/// (`1e400`) makes the whole document malformed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsPayload(pub RawFields);

impl MetricsPayload {
    /// Decode a buffered body according to its content type
    #[must_use]
    pub fn decode(headers: &HeaderMap, body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }

        if is_form(headers) {
            return Self(RawFields::from_pairs(url::form_urlencoded::parse(body)));
        }

        match serde_json::from_slice(body) {
            Ok(value) => Self(RawFields::from_json(value)),
            Err(e) => {
                debug!(error = %e, "Request body is not valid JSON, treating as empty");
                Self::default()
            }
        }
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

#[async_trait]
impl<S> FromRequest<S> for MetricsPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            let status = rejection.status();
            debug!(status = %status, "Request body could not be read");
            let body = ErrorResponse {
                error: rejection.body_text(),
            };
            (status, Json(body)).into_response()
        })?;

        Ok(Self::decode(&headers, &body))
    }
}
