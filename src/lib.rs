// ABOUTME: Main library entry point for the pantry recipe resolver
// ABOUTME: Ranks catalog recipes by ingredient overlap and rewrites them under dietary restrictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Resolver
//!
//! Matches the ingredients a user has on hand against a fixed recipe catalog,
//! ranks candidate recipes by overlap, and, when dietary restrictions are
//! active, rewrites each recipe into a compliant variant through a
//! backtracking substitution search.
//!
//! ## Architecture
//!
//! - **engine**: catalog, dietary policy, ranking, substitution search, orchestration
//! - **services**: request-shaped facade used by front ends
//! - **config**: environment-driven engine configuration
//! - **logging**: structured logging bootstrap
//!
//! Domain types and errors live in the `pantry-core` crate and are re-exported
//! here as [`models`] and [`errors`].

/// Configuration management
pub mod config;

/// Recipe resolution engine
pub mod engine;

/// Structured logging setup
pub mod logging;

/// Front-end services over the engine
pub mod services;

pub use pantry_core::{constants, errors, models};
