// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, labels locale, calorie basis and body limit from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based server configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `HTTP_PORT` | `5000` |
//! | `ENVIRONMENT` | `development` |
//! | `RUST_LOG` | `info` |
//! | `METRICS_LOCALE` | `fr` |
//! | `BMR_CALORIE_BASIS` | `rounded` |
//! | `MAX_BODY_BYTES` | `16384` |
//!
//! Unset or blank variables take the default. A value that does not parse is
//! a startup error naming the variable. `ENVIRONMENT` and `RUST_LOG` fall back
//! to their defaults instead, since the logging layer reads them as well.

use super::types::{Environment, LogLevel};
use bodymetrics_core::errors::{AppError, AppResult};
use bodymetrics_core::models::Locale;
use bodymetrics_intelligence::CalorieBasis;
use serde::Serialize;
use std::env;
use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level or filter directives
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Label language for categories, risks and recommendations
    pub const METRICS_LOCALE: &str = "METRICS_LOCALE";
    /// BMR value the activity multipliers apply to
    pub const BMR_CALORIE_BASIS: &str = "BMR_CALORIE_BASIS";
    /// Maximum accepted request body size
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
}

/// Default values
pub mod defaults {
    use std::net::{IpAddr, Ipv4Addr};

    /// Listen on every interface
    pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 5000;
    /// Default request body limit (16 KiB)
    pub const MAX_BODY_BYTES: usize = 16 * 1024;
}

/// Settings of the calculation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MetricsConfig {
    /// Language of category, risk and recommendation texts
    pub locale: Locale,
    /// Whether calorie needs derive from the rounded or the unrounded BMR
    pub calorie_basis: CalorieBasis,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: IpAddr,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Calculation settings
    pub metrics: MetricsConfig,
    /// Maximum request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST,
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            metrics: MetricsConfig::default(),
            max_body_bytes: defaults::MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first variable whose value is invalid
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first variable whose value is invalid
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_owned())
                .filter(|raw| !raw.is_empty())
        };

        let max_body_bytes = parse_or(
            value(env_vars::MAX_BODY_BYTES),
            env_vars::MAX_BODY_BYTES,
            defaults::MAX_BODY_BYTES,
        )?;
        if max_body_bytes == 0 {
            return Err(AppError::config(format!(
                "invalid value for {}: must be greater than 0",
                env_vars::MAX_BODY_BYTES
            ))
            .with_field(env_vars::MAX_BODY_BYTES));
        }

        Ok(Self {
            host: parse_or(value(env_vars::HOST), env_vars::HOST, defaults::HOST)?,
            http_port: parse_or(
                value(env_vars::HTTP_PORT),
                env_vars::HTTP_PORT,
                defaults::HTTP_PORT,
            )?,
            environment: value(env_vars::ENVIRONMENT)
                .map_or_else(Environment::default, |raw| {
                    Environment::from_str_or_default(&raw)
                }),
            log_level: value(env_vars::RUST_LOG)
                .map_or_else(LogLevel::default, |raw| LogLevel::from_str_or_default(&raw)),
            metrics: MetricsConfig {
                locale: parse_or(
                    value(env_vars::METRICS_LOCALE),
                    env_vars::METRICS_LOCALE,
                    Locale::default(),
                )?,
                calorie_basis: parse_or(
                    value(env_vars::BMR_CALORIE_BASIS),
                    env_vars::BMR_CALORIE_BASIS,
                    CalorieBasis::default(),
                )?,
            },
            max_body_bytes,
        })
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Body Metrics Server Configuration: bind={}, environment={}, log_level={}, locale={}, calorie_basis={}, max_body_bytes={}",
            self.socket_addr(),
            self.environment,
            self.log_level,
            self.metrics.locale,
            self.metrics.calorie_basis,
            self.max_body_bytes,
        )
    }
}

fn parse_or<T>(raw: Option<String>, name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.map_or(Ok(default), |raw| {
        raw.parse().map_err(|e| {
            AppError::config(format!("invalid value for {name}: '{raw}' ({e})")).with_field(name)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodymetrics_core::errors::ErrorCode;
    use serial_test::serial;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AppResult<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.metrics.locale, Locale::Fr);
        assert_eq!(config.metrics.calorie_basis, CalorieBasis::Rounded);
        assert_eq!(config.max_body_bytes, 16384);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("HTTP_PORT", "8081"),
            ("ENVIRONMENT", "production"),
            ("RUST_LOG", "debug"),
            ("METRICS_LOCALE", "en"),
            ("BMR_CALORIE_BASIS", "precise"),
            ("MAX_BODY_BYTES", "1024"),
        ])
        .unwrap();

        assert_eq!(
            config.socket_addr(),
            SocketAddr::new(IpAddr::V4(std::net::Ipv4Addr::LOCALHOST), 8081)
        );
        assert!(config.environment.is_production());
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.metrics.locale, Locale::En);
        assert_eq!(config.metrics.calorie_basis, CalorieBasis::Precise);
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[("HTTP_PORT", "  "), ("METRICS_LOCALE", "")]).unwrap();
        assert_eq!(config.http_port, 5000);
        assert_eq!(config.metrics.locale, Locale::Fr);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let cases = [
            ("HTTP_PORT", "http"),
            ("HTTP_PORT", "70000"),
            ("HOST", "not-an-ip"),
            ("METRICS_LOCALE", "de"),
            ("BMR_CALORIE_BASIS", "exact"),
            ("MAX_BODY_BYTES", "-1"),
            ("MAX_BODY_BYTES", "0"),
        ];
        for (name, raw) in cases {
            let error = load(&[(name, raw)]).unwrap_err();
            assert_eq!(error.code, ErrorCode::ConfigError, "{name}={raw}");
            assert_eq!(error.field.as_deref(), Some(name));
            assert!(error.message.contains(name), "{}", error.message);
        }
    }

    #[test]
    fn test_unknown_environment_falls_back() {
        let config = load(&[("ENVIRONMENT", "staging")]).unwrap();
        assert!(config.environment.is_development());
    }

    #[test]
    fn test_summary_mentions_settings() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("bind=0.0.0.0:5000"));
        assert!(summary.contains("locale=fr"));
        assert!(summary.contains("calorie_basis=rounded"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        env::set_var(env_vars::HTTP_PORT, "5055");
        env::set_var(env_vars::METRICS_LOCALE, "english");
        let config = ServerConfig::from_env();
        env::remove_var(env_vars::HTTP_PORT);
        env::remove_var(env_vars::METRICS_LOCALE);

        let config = config.unwrap();
        assert_eq!(config.http_port, 5055);
        assert_eq!(config.metrics.locale, Locale::En);
    }
}
