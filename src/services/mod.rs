// ABOUTME: Domain service layer composing validation, calculation and classification
// ABOUTME: Protocol-agnostic services shared by the HTTP routes and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers and the command-line tool both go through these services, so
//! the same validation rules and rounding apply regardless of the entry point.

/// BMI and BMR computation pipeline
pub mod health_metrics;

pub use health_metrics::{BmiAssessment, HealthMetricsService};
