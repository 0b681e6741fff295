// ABOUTME: Pipeline composition for BMI and BMR requests
// ABOUTME: Untyped fields in, validated and classified results or an AppError out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::MetricsConfig;
use bodymetrics_core::errors::{AppError, AppResult, ValidationError};
use bodymetrics_core::models::{BmiResult, BmrResult, Locale};
use bodymetrics_intelligence::calculator::{bmi_of, unrounded_bmr_of};
use bodymetrics_intelligence::{
    classify_bmi, daily_calories, round_to_display, validate_measurement, validate_person,
    CalorieBasis, RawFields,
};
use serde::Serialize;
use tracing::debug;

/// Full BMI assessment with localized labels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiAssessment {
    /// BMI rounded to two decimals
    pub bmi: f64,
    /// Category label
    pub category: &'static str,
    /// Risk level label
    pub risk_level: &'static str,
    /// Recommendation text
    pub recommendation: &'static str,
}

impl BmiAssessment {
    /// Render a classified BMI in the given locale
    #[must_use]
    pub fn from_result(result: &BmiResult, locale: Locale) -> Self {
        Self {
            bmi: result.value,
            category: result.category.label(locale),
            risk_level: result.risk_level.label(locale),
            recommendation: result.recommendation,
        }
    }
}

/// Stateless BMI/BMR pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthMetricsService {
    locale: Locale,
    calorie_basis: CalorieBasis,
}

impl HealthMetricsService {
    /// Create a service with explicit settings
    #[must_use]
    pub const fn new(locale: Locale, calorie_basis: CalorieBasis) -> Self {
        Self {
            locale,
            calorie_basis,
        }
    }

    /// Create a service from the loaded configuration
    #[must_use]
    pub const fn from_config(config: &MetricsConfig) -> Self {
        Self::new(config.locale, config.calorie_basis)
    }

    /// Label language in use
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Validate height/weight, compute the BMI and classify it
    ///
    /// # Errors
    ///
    /// Returns a validation error (HTTP 400) for unusable input and an
    /// internal error (HTTP 500) if the computed value cannot be classified
    pub fn compute_bmi(&self, data: &RawFields) -> AppResult<BmiResult> {
        let measurement = validate_measurement(data).map_err(rejected)?;
        let bmi = bmi_of(&measurement);
        let result = classify_bmi(bmi, self.locale)?;

        debug!(
            height_cm = measurement.height_cm,
            weight_kg = measurement.weight_kg,
            bmi = result.value,
            category = ?result.category,
            "BMI computed"
        );
        Ok(result)
    }

    /// [`Self::compute_bmi`] rendered with localized labels
    ///
    /// # Errors
    ///
    /// Same as [`Self::compute_bmi`]
    pub fn assess_bmi(&self, data: &RawFields) -> AppResult<BmiAssessment> {
        self.compute_bmi(data)
            .map(|result| BmiAssessment::from_result(&result, self.locale))
    }

    /// Validate height/weight/age/gender, compute the BMR and daily calorie needs
    ///
    /// # Errors
    ///
    /// Returns a validation error (HTTP 400) for unusable input and an
    /// internal error (HTTP 500) if the result is not a finite number
    pub fn compute_bmr(&self, data: &RawFields) -> AppResult<BmrResult> {
        let person = validate_person(data).map_err(rejected)?;
        let unrounded = unrounded_bmr_of(&person);
        if !unrounded.is_finite() {
            return Err(AppError::internal(format!(
                "BMR evaluated to a non-finite value ({unrounded})"
            )));
        }

        let result = BmrResult {
            value: round_to_display(unrounded),
            daily_calories: daily_calories(self.calorie_basis.base(unrounded)),
        };

        debug!(
            age_years = person.age_years,
            gender = %person.gender,
            bmr = result.value,
            calorie_basis = %self.calorie_basis,
            "BMR computed"
        );
        Ok(result)
    }
}

fn rejected(error: ValidationError) -> AppError {
    debug!(
        field = error.field.as_deref().unwrap_or(""),
        reason = %error.message,
        "Input rejected"
    );
    AppError::from(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodymetrics_core::errors::ErrorCode;
    use bodymetrics_core::models::{BmiCategory, RiskLevel};
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawFields {
        RawFields::from_json(value)
    }

    #[test]
    fn test_compute_bmi() {
        let service = HealthMetricsService::default();
        let result = service
            .compute_bmi(&raw(json!({"height": 175, "weight": 70})))
            .unwrap();
        assert!((result.value - 22.86).abs() < 1e-9);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_bmi_validation_error_keeps_field() {
        let service = HealthMetricsService::default();
        let error = service
            .compute_bmi(&raw(json!({"height": -175, "weight": 70})))
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.field.as_deref(), Some("height"));
        assert_eq!(error.http_status(), 400);
    }

    #[test]
    fn test_assessment_labels_follow_locale() {
        let data = raw(json!({"height": 160, "weight": 45}));
        let fr = HealthMetricsService::new(Locale::Fr, CalorieBasis::Rounded)
            .assess_bmi(&data)
            .unwrap();
        let en = HealthMetricsService::new(Locale::En, CalorieBasis::Rounded)
            .assess_bmi(&data)
            .unwrap();

        assert_eq!(fr.category, "Sous-poids");
        assert_eq!(fr.risk_level, "Élevé");
        assert_eq!(en.category, "Underweight");
        assert_eq!(en.risk_level, "High");
        assert!((fr.bmi - en.bmi).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compute_bmr_rounded_basis() {
        let service = HealthMetricsService::default();
        let result = service
            .compute_bmr(&raw(
                json!({"height": 175, "weight": 70, "age": 25, "gender": "M"}),
            ))
            .unwrap();
        assert!((result.value - 1724.05).abs() < 1e-9);
        assert!((result.daily_calories.sedentary - 2068.86).abs() < 1e-9);
        assert!((result.daily_calories.extremely_active - 3275.69).abs() < 1e-9);
    }

    #[test]
    fn test_compute_bmr_precise_basis() {
        let service = HealthMetricsService::new(Locale::Fr, CalorieBasis::Precise);
        let result = service
            .compute_bmr(&raw(
                json!({"height": 175, "weight": 70, "age": 25, "gender": "M"}),
            ))
            .unwrap();
        // unrounded BMR is 1724.052, so 1.9x lands on 3275.70 instead of 3275.69
        assert!((result.value - 1724.05).abs() < 1e-9);
        assert!((result.daily_calories.extremely_active - 3275.70).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_gender_error() {
        let service = HealthMetricsService::default();
        let error = service
            .compute_bmr(&raw(
                json!({"height": 175, "weight": 70, "age": 25, "gender": "X"}),
            ))
            .unwrap_err();
        assert_eq!(error.message, "gender must be 'M' or 'F'");
    }
}
