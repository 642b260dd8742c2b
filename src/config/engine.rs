// ABOUTME: Engine configuration with environment overrides and a validated global instance
// ABOUTME: Controls result limits and default output rendering for callers of the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! Defaults are overridden by environment variables:
//!
//! ```bash
//! export PANTRY_MAX_RESULTS=3
//! export PANTRY_OUTPUT_FORMAT=json
//! ```
//!
//! An invalid value is reported as a [`ConfigError`] rather than silently
//! replaced, so callers can refuse to start.

use super::error::ConfigError;
use pantry_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::num::NonZeroUsize;

/// How results are rendered for humans or machines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name, falling back to text for unrecognized values
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Engine-level knobs that callers apply around the resolution engine
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cap on resolved recipes returned to the caller (`None` = unlimited)
    pub max_results: Option<NonZeroUsize>,
    /// Default output format for the CLI
    pub output_format: OutputFormat,
}

impl EngineConfig {
    /// Load configuration from environment variables over defaults
    ///
    /// # Errors
    ///
    /// Returns an error if `PANTRY_MAX_RESULTS` is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if the max-results value is not a positive integer
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(env_config::MAX_RESULTS) {
            config.max_results = Some(parse_max_results(&raw)?);
        }

        if let Some(raw) = lookup(env_config::OUTPUT_FORMAT) {
            config.output_format = OutputFormat::from_str_or_default(&raw);
        }

        Ok(config)
    }

    /// Apply the result cap to an ordered list
    pub fn truncate<T>(&self, items: &mut Vec<T>) {
        if let Some(limit) = self.max_results {
            items.truncate(limit.get());
        }
    }
}

fn parse_max_results(raw: &str) -> Result<NonZeroUsize, ConfigError> {
    let value: usize = raw.trim().parse().map_err(|e| ConfigError::Parse {
        key: env_config::MAX_RESULTS,
        reason: format!("{e}"),
    })?;

    NonZeroUsize::new(value).ok_or(ConfigError::ValueOutOfRange(
        "PANTRY_MAX_RESULTS must be greater than zero",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = EngineConfig::from_lookup(|_| None).unwrap_or_default();
        assert_eq!(config, EngineConfig::default());
        assert!(config.max_results.is_none());
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let result = EngineConfig::from_lookup(lookup_from(&[("PANTRY_MAX_RESULTS", "0")]));
        assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
    }

    #[test]
    fn test_garbage_max_results_rejected() {
        let result = EngineConfig::from_lookup(lookup_from(&[("PANTRY_MAX_RESULTS", "lots")]));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_truncate_applies_limit() {
        let config =
            EngineConfig::from_lookup(lookup_from(&[("PANTRY_MAX_RESULTS", "2")])).unwrap_or_default();
        let mut items = vec![1, 2, 3];
        config.truncate(&mut items);
        assert_eq!(items, vec![1, 2]);
    }
}
