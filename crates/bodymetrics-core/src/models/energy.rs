// ABOUTME: Activity levels and daily calorie needs derived from BMR
// ABOUTME: Serializes with the French activity keys existing clients expect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::activity_factors;
use serde::{Deserialize, Serialize};

/// Activity level for daily calorie estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extremely active (hard training 2x/day)
    ExtremelyActive,
}

impl ActivityLevel {
    /// All activity levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Factor converting BMR into daily calorie needs
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => activity_factors::SEDENTARY,
            Self::LightlyActive => activity_factors::LIGHTLY_ACTIVE,
            Self::ModeratelyActive => activity_factors::MODERATELY_ACTIVE,
            Self::VeryActive => activity_factors::VERY_ACTIVE,
            Self::ExtremelyActive => activity_factors::EXTREMELY_ACTIVE,
        }
    }

    /// Key used in the `daily_calories` wire object
    #[must_use]
    pub const fn wire_key(self) -> &'static str {
        match self {
            Self::Sedentary => "sédentaire",
            Self::LightlyActive => "légèrement_actif",
            Self::ModeratelyActive => "modérément_actif",
            Self::VeryActive => "très_actif",
            Self::ExtremelyActive => "extrêmement_actif",
        }
    }
}

/// Estimated calories per day for each activity level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyCalories {
    /// Sedentary
    #[serde(rename = "sédentaire")]
    pub sedentary: f64,
    /// Lightly active
    #[serde(rename = "légèrement_actif")]
    pub lightly_active: f64,
    /// Moderately active
    #[serde(rename = "modérément_actif")]
    pub moderately_active: f64,
    /// Very active
    #[serde(rename = "très_actif")]
    pub very_active: f64,
    /// Extremely active
    #[serde(rename = "extrêmement_actif")]
    pub extremely_active: f64,
}

impl DailyCalories {
    /// Build by evaluating `per_level` for every activity level
    pub fn from_fn(mut per_level: impl FnMut(ActivityLevel) -> f64) -> Self {
        Self {
            sedentary: per_level(ActivityLevel::Sedentary),
            lightly_active: per_level(ActivityLevel::LightlyActive),
            moderately_active: per_level(ActivityLevel::ModeratelyActive),
            very_active: per_level(ActivityLevel::VeryActive),
            extremely_active: per_level(ActivityLevel::ExtremelyActive),
        }
    }

    /// Calories for one activity level
    #[must_use]
    pub const fn get(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
        }
    }

    /// Iterate `(level, calories)` from least to most active
    pub fn iter(&self) -> impl Iterator<Item = (ActivityLevel, f64)> + '_ {
        ActivityLevel::ALL.into_iter().map(|level| (level, self.get(level)))
    }
}

/// BMR with derived daily calorie needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrResult {
    /// BMR in kcal/day, rounded to two decimals
    pub value: f64,
    /// Calorie needs per activity level, each rounded to two decimals
    pub daily_calories: DailyCalories,
}
