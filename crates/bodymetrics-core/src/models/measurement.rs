// ABOUTME: Validated body measurement inputs for BMI and BMR calculation
// ABOUTME: Gender is a closed two-value enum so the formula branch is compiler-checked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Height and weight of a person.
///
/// Constructed by the input validator: `height_cm` lies in (0, 300] and
/// `weight_kg` in (0, 700].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}

/// Measurement extended with age and gender, as needed for BMR.
///
/// `age_years` lies in (0, 120] once validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Height and weight
    pub measurement: Measurement,
    /// Age in years
    pub age_years: f64,
    /// Gender selecting the BMR formula branch
    pub gender: Gender,
}

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male (`M` on the wire)
    #[serde(rename = "M")]
    Male,
    /// Female (`F` on the wire)
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Wire code for male
    pub const MALE_CODE: &'static str = "M";
    /// Wire code for female
    pub const FEMALE_CODE: &'static str = "F";

    /// Wire code of this gender
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => Self::MALE_CODE,
            Self::Female => Self::FEMALE_CODE,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a gender code is neither `M` nor `F`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized gender code '{0}'")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    // Codes are matched exactly: no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::MALE_CODE => Ok(Self::Male),
            Self::FEMALE_CODE => Ok(Self::Female),
            other => Err(UnknownGender(other.to_owned())),
        }
    }
}
