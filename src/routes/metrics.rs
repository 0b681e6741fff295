// ABOUTME: BMI and BMR route handlers
// ABOUTME: Thin handlers delegating to HealthMetricsService and shaping the wire responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body metric routes
//!
//! - `POST /health/bmi` returns `{"bmi", "message"}` where `message` is the category label
//! - `POST /health/bmr` returns `{"bmr", "daily_calories"}`
//! - `POST /health/bmi/assessment` returns `{"bmi", "category", "risk_level", "recommendation"}`
//!
//! Failures answer `{"error": "<message>"}` with 400 for invalid input and 500
//! for internal faults.

use super::payload::MetricsPayload;
use crate::services::{BmiAssessment, HealthMetricsService};
use axum::{extract::State, routing::post, Json, Router};
use bodymetrics_core::errors::AppError;
use bodymetrics_core::models::DailyCalories;
use serde::{Deserialize, Serialize};

/// `POST /health/bmi` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResponse {
    /// BMI rounded to two decimals
    pub bmi: f64,
    /// Category label
    pub message: String,
}

/// `POST /health/bmr` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrResponse {
    /// BMR in kcal/day rounded to two decimals
    pub bmr: f64,
    /// Calorie needs per activity level
    pub daily_calories: DailyCalories,
}

/// Body metric routes
pub struct MetricsRoutes;

impl MetricsRoutes {
    /// Create all body metric routes
    pub fn routes(service: HealthMetricsService) -> Router {
        Router::new()
            .route("/health/bmi", post(Self::handle_bmi))
            .route("/health/bmi/assessment", post(Self::handle_bmi_assessment))
            .route("/health/bmr", post(Self::handle_bmr))
            .with_state(service)
    }

    async fn handle_bmi(
        State(service): State<HealthMetricsService>,
        MetricsPayload(data): MetricsPayload,
    ) -> Result<Json<BmiResponse>, AppError> {
        let result = service.compute_bmi(&data)?;

        Ok(Json(BmiResponse {
            bmi: result.value,
            message: result.category.label(service.locale()).to_owned(),
        }))
    }

    async fn handle_bmi_assessment(
        State(service): State<HealthMetricsService>,
        MetricsPayload(data): MetricsPayload,
    ) -> Result<Json<BmiAssessment>, AppError> {
        service.assess_bmi(&data).map(Json)
    }

    async fn handle_bmr(
        State(service): State<HealthMetricsService>,
        MetricsPayload(data): MetricsPayload,
    ) -> Result<Json<BmrResponse>, AppError> {
        let result = service.compute_bmr(&data)?;

        Ok(Json(BmrResponse {
            bmr: result.value,
            daily_calories: result.daily_calories,
        }))
    }
}
