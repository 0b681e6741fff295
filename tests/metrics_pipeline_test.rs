// ABOUTME: Integration tests for the BMI/BMR pipeline through the service layer
// ABOUTME: Covers reference scenarios, validation ordering, boundaries and calorie rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bodymetrics_core::errors::ErrorCode;
use bodymetrics_core::models::{ActivityLevel, BmiCategory, Gender, Locale, RiskLevel};
use bodymetrics_intelligence::{
    bmi_category, calculate_bmi, calculate_bmr, round_to_display, validate_person, CalorieBasis,
};
use bodymetrics_server::services::HealthMetricsService;
use common::{fields, service};
use serde_json::json;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_bmi_scenarios() {
    let service = service();

    let result = service
        .compute_bmi(&fields(json!({"height": 175, "weight": 70})))
        .unwrap();
    assert_close(result.value, 22.86);
    assert_eq!(result.category.label(Locale::Fr), "Poids normal");

    let result = service
        .compute_bmi(&fields(json!({"height": 160, "weight": 50})))
        .unwrap();
    assert_close(result.value, 19.53);
    assert_eq!(result.category.label(Locale::Fr), "Poids normal");
}

#[test]
fn test_bmr_scenarios() {
    let service = service();

    let male = service
        .compute_bmr(&fields(
            json!({"height": 175, "weight": 70, "age": 25, "gender": "M"}),
        ))
        .unwrap();
    assert_close(male.value, 1724.05);

    let female = service
        .compute_bmr(&fields(
            json!({"height": 160, "weight": 60, "age": 30, "gender": "F"}),
        ))
        .unwrap();
    assert_close(female.value, 1368.19);
}

#[test]
fn test_negative_height_mentions_height() {
    let error = service()
        .compute_bmi(&fields(json!({"height": -175, "weight": 70})))
        .unwrap_err();
    assert!(error.message.contains("height"), "{}", error.message);
    assert_eq!(error.http_status(), 400);
}

#[test]
fn test_unknown_gender_mentions_gender() {
    let error = service()
        .compute_bmr(&fields(
            json!({"height": 175, "weight": 70, "age": 25, "gender": "X"}),
        ))
        .unwrap_err();
    assert!(error.message.contains("gender"), "{}", error.message);
    assert_eq!(error.field.as_deref(), Some("gender"));
}

#[test]
fn test_first_failure_wins() {
    let service = service();

    let error = service.compute_bmr(&fields(json!({}))).unwrap_err();
    assert_eq!(error.message, "no data provided");
    assert!(error.field.is_none());

    // weight is missing and gender is wrong: the measurement check runs first
    let error = service
        .compute_bmr(&fields(json!({"height": 175, "age": 25, "gender": "X"})))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.field.as_deref(), Some("weight"));

    let error = service
        .compute_bmr(&fields(
            json!({"height": 175, "weight": 70, "age": "old", "gender": "X"}),
        ))
        .unwrap_err();
    assert_eq!(error.message, "field 'age' must be a number");
}

#[test]
fn test_bmi_formula_property_holds_over_domain() {
    let mut height = 0.5;
    while height <= 300.0 {
        let mut weight = 0.5;
        while weight <= 700.0 {
            let bmi = calculate_bmi(height, weight);
            assert!(bmi.is_finite(), "{height}/{weight}");
            assert!(bmi >= 0.0);
            let height_m = height / 100.0;
            assert_close(bmi, round_to_display(weight / (height_m * height_m)));
            weight += 37.3;
        }
        height += 12.7;
    }
}

#[test]
fn test_classification_boundaries_are_upper_inclusive() {
    assert_eq!(bmi_category(18.5), Some(BmiCategory::Normal));
    assert_eq!(bmi_category(25.0), Some(BmiCategory::Normal));
    assert_eq!(bmi_category(30.0), Some(BmiCategory::Overweight));
    assert_eq!(bmi_category(30.000_001), Some(BmiCategory::Obese));
}

#[test]
fn test_boundary_reached_through_pipeline() {
    // 25.0 exactly: 100 cm and 25 kg
    let result = service()
        .compute_bmi(&fields(json!({"height": 100, "weight": 25})))
        .unwrap();
    assert_close(result.value, 25.0);
    assert_eq!(result.category, BmiCategory::Normal);
    assert_eq!(result.risk_level, RiskLevel::Low);

    // 30.0 exactly: 100 cm and 30 kg
    let result = service()
        .compute_bmi(&fields(json!({"height": 100, "weight": 30})))
        .unwrap();
    assert_eq!(result.category, BmiCategory::Overweight);
    assert_eq!(result.risk_level, RiskLevel::Moderate);
}

#[test]
fn test_bmr_monotonicity() {
    for gender in [Gender::Male, Gender::Female] {
        let mut previous = f64::INFINITY;
        for age in [1.0, 18.0, 35.0, 60.0, 90.0, 120.0] {
            let bmr = calculate_bmr(170.0, 65.0, age, gender);
            assert!(bmr < previous, "{gender:?} age {age}");
            previous = bmr;
        }

        let mut previous = f64::NEG_INFINITY;
        for weight in [5.0, 40.0, 80.0, 150.0, 400.0, 700.0] {
            let bmr = calculate_bmr(170.0, weight, 40.0, gender);
            assert!(bmr > previous, "{gender:?} weight {weight}");
            previous = bmr;
        }
    }
}

#[test]
fn test_daily_calories_use_rounded_bmr_by_default() {
    let result = service()
        .compute_bmr(&fields(
            json!({"height": 180, "weight": 80, "age": 35, "gender": "M"}),
        ))
        .unwrap();

    for level in ActivityLevel::ALL {
        assert_close(
            result.daily_calories.get(level),
            round_to_display(result.value * level.multiplier()),
        );
    }
    assert_close(
        result.daily_calories.very_active,
        round_to_display(result.value * 1.725),
    );
}

#[test]
fn test_precise_basis_differs_only_in_rounding() {
    let data = fields(json!({"height": 175, "weight": 70, "age": 25, "gender": "M"}));
    let rounded = HealthMetricsService::new(Locale::Fr, CalorieBasis::Rounded)
        .compute_bmr(&data)
        .unwrap();
    let precise = HealthMetricsService::new(Locale::Fr, CalorieBasis::Precise)
        .compute_bmr(&data)
        .unwrap();

    assert_close(rounded.value, precise.value);
    for level in ActivityLevel::ALL {
        let diff = (rounded.daily_calories.get(level) - precise.daily_calories.get(level)).abs();
        assert!(diff <= 0.02, "{level:?} differs by {diff}");
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let data = fields(json!({"height": "181.5", "weight": 77.7, "age": 41, "gender": "F"}));
    let first = validate_person(&data).unwrap();
    let second = validate_person(&data).unwrap();
    assert_eq!(first, second);

    let service = service();
    assert_eq!(
        service.compute_bmr(&data).unwrap(),
        service.compute_bmr(&data).unwrap()
    );
}

#[test]
fn test_form_style_strings_are_accepted() {
    let data = bodymetrics_intelligence::RawFields::from_pairs([
        ("height", "175"),
        ("weight", "70"),
        ("age", "25"),
        ("gender", "M"),
    ]);
    let result = service().compute_bmr(&data).unwrap();
    assert_close(result.value, 1724.05);
}
