// ABOUTME: Configuration module for server settings loaded from the environment
// ABOUTME: Exposes ServerConfig plus the LogLevel and Environment types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and server configuration
pub mod environment;
/// Shared configuration enums
pub mod types;

pub use environment::{MetricsConfig, ServerConfig};
pub use types::{Environment, LogLevel};
