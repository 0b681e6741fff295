// ABOUTME: Axum response conversion for AppError
// ABOUTME: Maps error codes to HTTP status and logs internal failures before hiding them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorResponse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                error.code = ?self.code,
                error.message = %self.message,
                "Request failed with internal error"
            );
        } else {
            tracing::debug!(
                error.code = ?self.code,
                error.field = self.field.as_deref().unwrap_or(""),
                error.message = %self.message,
                "Request rejected"
            );
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
