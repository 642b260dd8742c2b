// ABOUTME: Request-shaped services layered over the resolution engine
// ABOUTME: Turns raw caller input into engine calls and applies configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recipe search, customization, and selection menu
pub mod recipes;

pub use recipes::{RecipeService, SelectionMenu};
