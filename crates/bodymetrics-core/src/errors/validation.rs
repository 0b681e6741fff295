// ABOUTME: Validation error type naming the offending field and the reason
// ABOUTME: Constructors produce the exact messages reported to API callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use thiserror::Error;

/// A user-caused input failure.
///
/// Always recoverable: the message tells the caller which field to fix and how.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Name of the offending field, absent when the whole payload is unusable
    pub field: Option<String>,
    /// Classification of the failure
    pub code: ErrorCode,
    /// Human-readable reason
    pub message: String,
}

impl ValidationError {
    fn for_field(field: &str, code: ErrorCode, message: String) -> Self {
        Self {
            field: Some(field.to_owned()),
            code,
            message,
        }
    }

    /// The payload is absent or carries no fields at all
    #[must_use]
    pub fn no_data() -> Self {
        Self {
            field: None,
            code: ErrorCode::InvalidInput,
            message: "no data provided".to_owned(),
        }
    }

    /// A required field is absent
    #[must_use]
    pub fn missing(field: &str) -> Self {
        Self::for_field(
            field,
            ErrorCode::MissingRequiredField,
            format!("field '{field}' is missing"),
        )
    }

    /// A field cannot be interpreted as a real number
    #[must_use]
    pub fn not_a_number(field: &str) -> Self {
        Self::for_field(
            field,
            ErrorCode::InvalidFormat,
            format!("field '{field}' must be a number"),
        )
    }

    /// A numeric field is zero or negative
    #[must_use]
    pub fn not_positive(field: &str) -> Self {
        Self::for_field(
            field,
            ErrorCode::ValueOutOfRange,
            format!("field '{field}' must be a positive number"),
        )
    }

    /// A numeric field exceeds its documented upper bound
    #[must_use]
    pub fn out_of_range(field: &str, upper_bound: f64) -> Self {
        Self::for_field(
            field,
            ErrorCode::ValueOutOfRange,
            format!("field '{field}' must be between 0 and {upper_bound}"),
        )
    }

    /// The gender code is not one of the recognized values
    #[must_use]
    pub fn invalid_gender(field: &str, male: &str, female: &str) -> Self {
        Self::for_field(
            field,
            ErrorCode::InvalidInput,
            format!("gender must be '{male}' or '{female}'"),
        )
    }
}
