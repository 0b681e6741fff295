// ABOUTME: BMI categories with risk levels and per-locale labels and recommendations
// ABOUTME: French labels are the wire-compatible default, English is selectable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for category, risk and recommendation texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// French (`fr`), matches existing clients
    #[default]
    Fr,
    /// English (`en`)
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fr => f.write_str("fr"),
            Self::En => f.write_str("en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "french" => Ok(Self::Fr),
            "en" | "english" => Ok(Self::En),
            other => Err(format!("unsupported locale '{other}' (expected 'fr' or 'en')")),
        }
    }
}

/// Health risk associated with a BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Faible / Low
    Low,
    /// Modéré / Moderate
    Moderate,
    /// Élevé / High
    High,
}

impl RiskLevel {
    /// Display label in the given locale
    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Low, Locale::Fr) => "Faible",
            (Self::Moderate, Locale::Fr) => "Modéré",
            (Self::High, Locale::Fr) => "Élevé",
            (Self::Low, Locale::En) => "Low",
            (Self::Moderate, Locale::En) => "Moderate",
            (Self::High, Locale::En) => "High",
        }
    }
}

/// BMI category, ordered from lowest to highest BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Sous-poids / Underweight
    Underweight,
    /// Poids normal / Normal
    Normal,
    /// Surpoids / Overweight
    Overweight,
    /// Obésité / Obese
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [Self; 4] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
    ];

    /// Display label in the given locale
    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Underweight, Locale::Fr) => "Sous-poids",
            (Self::Normal, Locale::Fr) => "Poids normal",
            (Self::Overweight, Locale::Fr) => "Surpoids",
            (Self::Obese, Locale::Fr) => "Obésité",
            (Self::Underweight, Locale::En) => "Underweight",
            (Self::Normal, Locale::En) => "Normal",
            (Self::Overweight, Locale::En) => "Overweight",
            (Self::Obese, Locale::En) => "Obese",
        }
    }

    /// Risk level carried by this category
    #[must_use]
    pub const fn risk_level(self) -> RiskLevel {
        match self {
            Self::Underweight | Self::Obese => RiskLevel::High,
            Self::Normal => RiskLevel::Low,
            Self::Overweight => RiskLevel::Moderate,
        }
    }

    /// Fixed recommendation text in the given locale
    #[must_use]
    pub const fn recommendation(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Underweight, Locale::Fr) => {
                "Consultez un professionnel de santé. Vous pourriez avoir besoin de prendre du poids."
            }
            (Self::Normal, Locale::Fr) => {
                "Maintenez un mode de vie sain avec une alimentation équilibrée et de l'exercice."
            }
            (Self::Overweight, Locale::Fr) => {
                "Envisagez de faire de l'exercice et d'ajuster votre alimentation."
            }
            (Self::Obese, Locale::Fr) => {
                "Consultez un professionnel de santé pour un plan de gestion personnalisé."
            }
            (Self::Underweight, Locale::En) => {
                "Consult a healthcare professional. You may need to gain weight."
            }
            (Self::Normal, Locale::En) => {
                "Maintain a healthy lifestyle with a balanced diet and regular exercise."
            }
            (Self::Overweight, Locale::En) => "Consider exercising and adjusting your diet.",
            (Self::Obese, Locale::En) => {
                "Consult a healthcare professional for a personalized management plan."
            }
        }
    }
}

/// Classified BMI value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    /// BMI rounded to two decimals
    pub value: f64,
    /// Category the value falls into
    pub category: BmiCategory,
    /// Risk level of the category
    pub risk_level: RiskLevel,
    /// Recommendation text for the category
    pub recommendation: &'static str,
}
