// ABOUTME: Domain models for body measurements and calculated health metrics
// ABOUTME: All values are immutable and live for a single calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! Entities are created per calculation and discarded after producing output.

/// BMI categories, risk levels and the BMI result
pub mod assessment;
/// Activity levels, daily calorie needs and the BMR result
pub mod energy;
/// Validated measurement and person inputs
pub mod measurement;

pub use assessment::{BmiCategory, BmiResult, Locale, RiskLevel};
pub use energy::{ActivityLevel, BmrResult, DailyCalories};
pub use measurement::{Gender, Measurement, Person};
