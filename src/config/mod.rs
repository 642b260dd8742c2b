// ABOUTME: Configuration module for the recipe resolver
// ABOUTME: Re-exports engine configuration and configuration error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration loaded from the environment
pub mod engine;
/// Configuration error types
pub mod error;

pub use engine::{EngineConfig, OutputFormat};
pub use error::ConfigError;
