// ABOUTME: Configuration error types for environment loading and validation
// ABOUTME: Defines error variants for parse failures and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use pantry_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration value
    #[error("Parse error for {key}: {reason}")]
    Parse {
        /// Environment variable that failed to parse
        key: &'static str,
        /// Why parsing failed
        reason: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
