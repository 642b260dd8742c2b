// ABOUTME: Logging configuration and structured logging setup for the recipe resolver
// ABOUTME: Configures log levels, formatters, and output destination from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging bootstrap built on `tracing-subscriber`.
//!
//! Logs are written to stderr so that command output on stdout stays
//! machine-readable.

use pantry_core::constants::{env_config, service_names};
use pantry_core::errors::{AppError, AppResult};
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Parse a format name, falling back to pretty output
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            service_name: service_names::PANTRY_RESOLVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_for(service_names::PANTRY_RESOLVER)
    }

    /// Like [`Self::from_env`], naming the service `default_service` unless
    /// `SERVICE_NAME` overrides it
    #[must_use]
    pub fn from_env_for(default_service: &str) -> Self {
        let environment =
            env::var(env_config::ENVIRONMENT).unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level: env::var(env_config::RUST_LOG).unwrap_or_else(|_| "info".into()),
            format: env::var(env_config::LOG_FORMAT)
                .map(|v| LogFormat::from_str_or_default(&v))
                .unwrap_or_default(),
            include_location: is_production
                || env::var(env_config::LOG_INCLUDE_LOCATION).is_ok(),
            service_name: env::var(env_config::SERVICE_NAME)
                .unwrap_or_else(|_| default_service.to_owned()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Override the level, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the filter: `RUST_LOG` wins when set, otherwise the configured level
    fn env_filter(&self) -> EnvFilter {
        env::var(env_config::RUST_LOG).map_or_else(
            |_| EnvFilter::new(&self.level),
            |directive| EnvFilter::new(&directive),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };

        installed.map_err(|e| {
            AppError::internal(format!("Failed to initialize logging: {e}")).with_source(e)
        })?;

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );

        Ok(())
    }
}
