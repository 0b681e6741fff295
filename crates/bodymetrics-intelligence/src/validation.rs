// ABOUTME: Input validator converting untyped request fields into typed measurements
// ABOUTME: Checks presence, numeric type and domain range, stopping at the first failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation
//!
//! Requests arrive either as JSON (typed numbers) or as form data (everything is
//! a string). Numeric fields therefore accept both JSON numbers and strings that
//! parse as a finite real number; any other value (booleans, null, arrays,
//! objects, non-numeric or non-finite strings) is rejected as "must be a number".
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. the payload must carry at least one field
//! 2. `height`, then `weight` (then `age` for a person): present, numeric,
//!    strictly positive, at most the documented bound
//! 3. `gender` (person only): present and exactly `M` or `F`

use bodymetrics_core::constants::{bounds, fields};
use bodymetrics_core::errors::ValidationError;
use bodymetrics_core::models::{Gender, Measurement, Person};
use serde_json::{Map, Value};

/// Untyped request fields, keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFields(Map<String, Value>);

impl RawFields {
    /// Wrap a JSON document. Anything other than an object carries no fields.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Build from string key/value pairs such as decoded form data.
    ///
    /// Later duplicates of a key replace earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), Value::String(value.into())))
                .collect(),
        )
    }

    /// Whether no field at all was supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw value of a field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Map<String, Value>> for RawFields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Validate the fields needed for BMI.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the first field that fails, or a
/// field-less error when the payload is empty.
pub fn validate_measurement(data: &RawFields) -> Result<Measurement, ValidationError> {
    if data.is_empty() {
        return Err(ValidationError::no_data());
    }

    let height_cm = bounded_number(data, fields::HEIGHT, bounds::MAX_HEIGHT_CM)?;
    let weight_kg = bounded_number(data, fields::WEIGHT, bounds::MAX_WEIGHT_KG)?;

    Ok(Measurement {
        height_cm,
        weight_kg,
    })
}

/// Validate the fields needed for BMR: the measurement first, then age and gender.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the first field that fails.
pub fn validate_person(data: &RawFields) -> Result<Person, ValidationError> {
    let measurement = validate_measurement(data)?;
    let age_years = bounded_number(data, fields::AGE, bounds::MAX_AGE_YEARS)?;
    let gender = parse_gender(data)?;

    Ok(Person {
        measurement,
        age_years,
        gender,
    })
}

fn bounded_number(data: &RawFields, field: &str, upper_bound: f64) -> Result<f64, ValidationError> {
    let raw = data
        .get(field)
        .ok_or_else(|| ValidationError::missing(field))?;
    let value = coerce_number(raw).ok_or_else(|| ValidationError::not_a_number(field))?;

    if value <= 0.0 {
        return Err(ValidationError::not_positive(field));
    }
    if value > upper_bound {
        return Err(ValidationError::out_of_range(field, upper_bound));
    }
    Ok(value)
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite())
}

fn parse_gender(data: &RawFields) -> Result<Gender, ValidationError> {
    let raw = data
        .get(fields::GENDER)
        .ok_or_else(|| ValidationError::missing(fields::GENDER))?;

    raw.as_str()
        .and_then(|code| code.parse().ok())
        .ok_or_else(|| {
            ValidationError::invalid_gender(fields::GENDER, Gender::MALE_CODE, Gender::FEMALE_CODE)
        })
}
