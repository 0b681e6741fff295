// ABOUTME: Core types and constants for the body metrics calculation service
// ABOUTME: Foundation crate with error handling, domain models, and formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Body Metrics Core
//!
//! Foundation crate providing shared types and constants for the body metrics
//! service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Field names, domain bounds, formula coefficients and activity multipliers
//! - **models**: Immutable value objects produced by validation and calculation

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Measurement, person and result models
pub mod models;
