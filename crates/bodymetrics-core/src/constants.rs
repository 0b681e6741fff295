// ABOUTME: Constants for field names, measurement bounds, and formula coefficients
// ABOUTME: Pure data constants organized by domain for the body metrics pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Request field names as they appear on the wire
pub mod fields {
    /// Height in centimeters
    pub const HEIGHT: &str = "height";
    /// Weight in kilograms
    pub const WEIGHT: &str = "weight";
    /// Age in years
    pub const AGE: &str = "age";
    /// Gender code (`M` or `F`)
    pub const GENDER: &str = "gender";
}

/// Inclusive upper bounds of the accepted measurement domains (lower bound is exclusive 0)
pub mod bounds {
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Maximum weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 700.0;
    /// Maximum age in years
    pub const MAX_AGE_YEARS: f64 = 120.0;
}

/// BMI category thresholds
pub mod bmi {
    /// Values strictly below this are underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Values up to and including this are normal
    pub const NORMAL_UP_TO: f64 = 25.0;
    /// Values up to and including this are overweight
    pub const OVERWEIGHT_UP_TO: f64 = 30.0;
}

/// Revised Harris-Benedict coefficients (Roza & Shizgal, 1984)
pub mod harris_benedict {
    /// Male constant term
    pub const MALE_CONSTANT: f64 = 88.362;
    /// Male weight coefficient (per kg)
    pub const MALE_WEIGHT_COEF: f64 = 13.397;
    /// Male height coefficient (per cm)
    pub const MALE_HEIGHT_COEF: f64 = 4.799;
    /// Male age coefficient (per year, subtracted)
    pub const MALE_AGE_COEF: f64 = 5.677;

    /// Female constant term
    pub const FEMALE_CONSTANT: f64 = 447.593;
    /// Female weight coefficient (per kg)
    pub const FEMALE_WEIGHT_COEF: f64 = 9.247;
    /// Female height coefficient (per cm)
    pub const FEMALE_HEIGHT_COEF: f64 = 3.098;
    /// Female age coefficient (per year, subtracted)
    pub const FEMALE_AGE_COEF: f64 = 4.330;
}

/// Activity factor multipliers applied to BMR
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHTLY_ACTIVE: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATELY_ACTIVE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const VERY_ACTIVE: f64 = 1.725;
    /// Hard daily exercise plus physical job, or training twice a day
    pub const EXTREMELY_ACTIVE: f64 = 1.9;
}

/// Decimal places used for every displayed metric
pub const DISPLAY_DECIMALS: usize = 2;

/// Service identification
pub mod service_names {
    /// Default service name used in structured logs
    pub const BODYMETRICS_SERVER: &str = "bodymetrics-server";
}
