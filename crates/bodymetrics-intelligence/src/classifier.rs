// ABOUTME: Maps BMI to ordered categories and BMR to activity-level calorie needs
// ABOUTME: Category buckets are an explicit ordered list tested first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Classifier
//!
//! BMI categories come from [`BMI_BUCKETS`], scanned from the lowest bucket
//! upward; the first bucket whose upper bound admits the value wins:
//!
//! | Upper bound | Category | Risk |
//! |---|---|---|
//! | `< 18.5` | Underweight | High |
//! | `<= 25` | Normal | Low |
//! | `<= 30` | Overweight | Moderate |
//! | unbounded | Obese | High |
//!
//! So 18.5 and 25.0 are Normal and 30.0 is Overweight. A value no bucket
//! admits (NaN) is a programming defect and yields an internal error.

use crate::calculator::round_to_display;
use bodymetrics_core::constants::bmi;
use bodymetrics_core::errors::{AppError, AppResult};
use bodymetrics_core::models::{BmiCategory, BmiResult, DailyCalories, Locale};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Upper edge of a BMI bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpperBound {
    /// Admits values strictly below the bound
    Below(f64),
    /// Admits values up to and including the bound
    AtMost(f64),
    /// Admits every ordered value (not NaN)
    Unbounded,
}

impl UpperBound {
    /// Whether `value` lies under this edge
    #[must_use]
    pub fn admits(self, value: f64) -> bool {
        match self {
            Self::Below(bound) => value < bound,
            Self::AtMost(bound) => value <= bound,
            Self::Unbounded => value <= f64::INFINITY,
        }
    }
}

/// One row of the classification table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiBucket {
    /// Upper edge of the bucket; the lower edge is the previous bucket's upper edge
    pub upper: UpperBound,
    /// Category assigned to values in the bucket
    pub category: BmiCategory,
}

/// BMI buckets in ascending order
pub const BMI_BUCKETS: [BmiBucket; 4] = [
    BmiBucket {
        upper: UpperBound::Below(bmi::UNDERWEIGHT_BELOW),
        category: BmiCategory::Underweight,
    },
    BmiBucket {
        upper: UpperBound::AtMost(bmi::NORMAL_UP_TO),
        category: BmiCategory::Normal,
    },
    BmiBucket {
        upper: UpperBound::AtMost(bmi::OVERWEIGHT_UP_TO),
        category: BmiCategory::Overweight,
    },
    BmiBucket {
        upper: UpperBound::Unbounded,
        category: BmiCategory::Obese,
    },
];

/// Category of a BMI value, `None` when no bucket admits it
#[must_use]
pub fn bmi_category(bmi: f64) -> Option<BmiCategory> {
    BMI_BUCKETS
        .iter()
        .find(|bucket| bucket.upper.admits(bmi))
        .map(|bucket| bucket.category)
}

/// Classify a computed BMI into category, risk level and recommendation
///
/// # Errors
///
/// Returns an internal error when no bucket matches, which only happens for
/// values that are not ordered (NaN) and indicates a defect upstream.
pub fn classify_bmi(bmi: f64, locale: Locale) -> AppResult<BmiResult> {
    let Some(category) = bmi_category(bmi) else {
        // Reported at error level where the failure is answered, not here
        debug!(bmi = %bmi, "BMI value matched no classification bucket");
        return Err(AppError::internal(format!(
            "BMI value {bmi} matched no classification bucket"
        )));
    };

    Ok(BmiResult {
        value: bmi,
        category,
        risk_level: category.risk_level(),
        recommendation: category.recommendation(locale),
    })
}

/// Daily calorie needs: `bmr` times each activity multiplier, each rounded independently
#[must_use]
pub fn daily_calories(bmr: f64) -> DailyCalories {
    DailyCalories::from_fn(|level| round_to_display(bmr * level.multiplier()))
}

/// Which BMR value the activity multipliers are applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalorieBasis {
    /// The two-decimal BMR that is also reported (matches existing clients)
    #[default]
    Rounded,
    /// The unrounded BMR, avoiding compounded rounding
    Precise,
}

impl CalorieBasis {
    /// Pick the multiplier base from an unrounded BMR
    #[must_use]
    pub fn base(self, unrounded_bmr: f64) -> f64 {
        match self {
            Self::Rounded => round_to_display(unrounded_bmr),
            Self::Precise => unrounded_bmr,
        }
    }
}

impl fmt::Display for CalorieBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rounded => f.write_str("rounded"),
            Self::Precise => f.write_str("precise"),
        }
    }
}

impl FromStr for CalorieBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rounded" => Ok(Self::Rounded),
            "precise" | "unrounded" => Ok(Self::Precise),
            other => Err(format!(
                "unsupported calorie basis '{other}' (expected 'rounded' or 'precise')"
            )),
        }
    }
}
