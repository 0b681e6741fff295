// ABOUTME: Body metrics calculation engine: validate, calculate, classify
// ABOUTME: Each stage depends only on the one below it and holds no state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Body Metrics Intelligence
//!
//! The three pipeline stages, in the order they run:
//!
//! 1. [`validation`] turns untyped request fields into a [`Measurement`] or [`Person`]
//! 2. [`calculator`] evaluates the BMI and Harris-Benedict BMR formulas
//! 3. [`classifier`] maps results to categories and daily calorie needs
//!
//! Every function here is pure and safe to call from any thread.
//!
//! [`Measurement`]: bodymetrics_core::models::Measurement
//! [`Person`]: bodymetrics_core::models::Person

/// BMI and BMR formulas
pub mod calculator;
/// BMI categories and activity-level calorie needs
pub mod classifier;
/// Untyped field parsing and domain validation
pub mod validation;

pub use calculator::{calculate_bmi, calculate_bmr, harris_benedict, round_to_display};
pub use classifier::{bmi_category, classify_bmi, daily_calories, CalorieBasis};
pub use validation::{validate_measurement, validate_person, RawFields};
