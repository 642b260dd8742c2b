// ABOUTME: Core types and constants for the pantry recipe resolver
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types for the recipe resolution engine.
//! This crate changes infrequently so the engine crate can rebuild on its own.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and catalog errors
//! - **models**: Recipes, dietary restrictions, selections, and resolution results
//! - **constants**: Service names, environment keys, and restriction labels

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `DietaryRestriction`, `ResolvedRecipe`, etc.)
pub mod models;
