// ABOUTME: Unified error handling with standard error codes for the recipe resolver
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias used across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible boundary (catalog construction, configuration, CLI rendering)
//! reports an [`AppError`] carrying a stable [`ErrorCode`]. Domain outcomes of
//! the resolution engine (an infeasible recipe, an unknown recipe name) are
//! ordinary values and never become errors.

/// Catalog construction errors
pub mod catalog;

pub use catalog::CatalogError;

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::error::Error as StdError;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    /// Resource identifier collides with an existing one
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // Configuration (6000-6999)
    /// Configuration value is present but invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Output could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Process exit status the CLI reports for this error
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::InvalidInput => 2,
            Self::ResourceAlreadyExists => 3,
            Self::ConfigInvalid => 4,
            Self::InternalError | Self::SerializationError => 1,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional key-value context
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let (base, details) = match &error {
            CatalogError::DuplicateRecipe { name } => (
                Self::new(ErrorCode::ResourceAlreadyExists, error.to_string()),
                json!({ "recipe": name }),
            ),
            CatalogError::BlankRecipeName { position } => (
                Self::invalid_input(error.to_string()),
                json!({ "position": position }),
            ),
            CatalogError::BlankIngredient { recipe, position } => (
                Self::invalid_input(error.to_string()),
                json!({ "recipe": recipe, "position": position }),
            ),
        };
        base.with_details(details).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
