// ABOUTME: BMI and Harris-Benedict BMR formulas with two-decimal display rounding
// ABOUTME: Pure functions assuming inputs already passed the validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric Calculator
//!
//! # Contract
//!
//! These functions do not re-validate. Callers must pass values accepted by
//! [`crate::validation`]: height in (0, 300] cm, weight in (0, 700] kg and age
//! in (0, 120] years. Within that domain every result is finite.
//!
//! # Scientific References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>

use bodymetrics_core::constants::{harris_benedict as hb, DISPLAY_DECIMALS};
use bodymetrics_core::models::{Gender, Measurement, Person};

/// Round to the display precision (two decimals).
///
/// Rounds the exact binary value rather than `value * 100`, matching what
/// existing clients compute: `1724.05 * 1.9` is stored as 3275.69499... and
/// becomes 3275.69, where scaling first would overshoot to 3275.70.
#[must_use]
pub fn round_to_display(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.prec$}", prec = DISPLAY_DECIMALS)
        .parse()
        .unwrap_or(value)
}

/// Body Mass Index: `weight_kg / (height_cm / 100)^2`, rounded to two decimals
///
/// Assumes validated inputs (see the module contract).
#[must_use]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to_display(weight_kg / (height_m * height_m))
}

/// Unrounded revised Harris-Benedict BMR in kcal/day
///
/// - Male: `88.362 + 13.397 x weight + 4.799 x height - 5.677 x age`
/// - Female: `447.593 + 9.247 x weight + 3.098 x height - 4.330 x age`
///
/// Assumes validated inputs (see the module contract).
// Plain left-to-right evaluation keeps results identical to existing clients.
#[allow(clippy::suboptimal_flops)]
#[must_use]
pub fn harris_benedict(height_cm: f64, weight_kg: f64, age_years: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => {
            hb::MALE_CONSTANT + hb::MALE_WEIGHT_COEF * weight_kg + hb::MALE_HEIGHT_COEF * height_cm
                - hb::MALE_AGE_COEF * age_years
        }
        Gender::Female => {
            hb::FEMALE_CONSTANT
                + hb::FEMALE_WEIGHT_COEF * weight_kg
                + hb::FEMALE_HEIGHT_COEF * height_cm
                - hb::FEMALE_AGE_COEF * age_years
        }
    }
}

/// Basal Metabolic Rate in kcal/day, rounded to two decimals
///
/// Assumes validated inputs (see the module contract).
#[must_use]
pub fn calculate_bmr(height_cm: f64, weight_kg: f64, age_years: f64, gender: Gender) -> f64 {
    round_to_display(harris_benedict(height_cm, weight_kg, age_years, gender))
}

/// [`calculate_bmi`] for a validated measurement
#[must_use]
pub fn bmi_of(measurement: &Measurement) -> f64 {
    calculate_bmi(measurement.height_cm, measurement.weight_kg)
}

/// [`harris_benedict`] for a validated person
#[must_use]
pub fn unrounded_bmr_of(person: &Person) -> f64 {
    harris_benedict(
        person.measurement.height_cm,
        person.measurement.weight_kg,
        person.age_years,
        person.gender,
    )
}
