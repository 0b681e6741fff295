// ABOUTME: BMI and BMR command implementations for the CLI
// ABOUTME: Render pipeline results as readable text or as the HTTP JSON body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bodymetrics_core::errors::{AppError, AppResult};
use bodymetrics_core::models::Locale;
use bodymetrics_intelligence::RawFields;
use bodymetrics_server::routes::{BmiResponse, BmrResponse};
use bodymetrics_server::services::{BmiAssessment, HealthMetricsService};
use serde::Serialize;
use std::fmt::Write;

/// Compute and render a BMI assessment
pub fn bmi(
    service: &HealthMetricsService,
    args: &[(&str, String)],
    json: bool,
) -> AppResult<String> {
    let result = service.compute_bmi(&fields(args))?;

    if json {
        return to_json(&BmiResponse {
            bmi: result.value,
            message: result.category.label(service.locale()).to_owned(),
        });
    }

    let assessment = BmiAssessment::from_result(&result, service.locale());
    let labels = Labels::for_locale(service.locale());
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", labels.bmi, assessment.bmi);
    let _ = writeln!(out, "{}: {}", labels.category, assessment.category);
    let _ = writeln!(out, "{}: {}", labels.risk_level, assessment.risk_level);
    let _ = write!(out, "{}: {}", labels.recommendation, assessment.recommendation);
    Ok(out)
}

/// Compute and render a BMR with daily calorie needs
pub fn bmr(
    service: &HealthMetricsService,
    args: &[(&str, String)],
    json: bool,
) -> AppResult<String> {
    let result = service.compute_bmr(&fields(args))?;

    if json {
        return to_json(&BmrResponse {
            bmr: result.value,
            daily_calories: result.daily_calories,
        });
    }

    let labels = Labels::for_locale(service.locale());
    let mut out = String::new();
    let _ = write!(out, "BMR: {} {}", result.value, labels.calories);
    for (level, calories) in result.daily_calories.iter() {
        let _ = write!(out, "\n  {:<20} {calories:>10.2}", level.wire_key());
    }
    Ok(out)
}

fn fields(args: &[(&str, String)]) -> RawFields {
    RawFields::from_pairs(args.iter().map(|(key, value)| (*key, value.as_str())))
}

fn to_json<T: Serialize>(body: &T) -> AppResult<String> {
    serde_json::to_string_pretty(body)
        .map_err(|e| AppError::internal("failed to serialize output").with_source(e))
}

struct Labels {
    bmi: &'static str,
    category: &'static str,
    risk_level: &'static str,
    recommendation: &'static str,
    calories: &'static str,
}

impl Labels {
    const fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Fr => Self {
                bmi: "IMC",
                category: "Catégorie",
                risk_level: "Niveau de risque",
                recommendation: "Recommandation",
                calories: "calories",
            },
            Locale::En => Self {
                bmi: "BMI",
                category: "Category",
                risk_level: "Risk level",
                recommendation: "Recommendation",
                calories: "calories",
            },
        }
    }
}
