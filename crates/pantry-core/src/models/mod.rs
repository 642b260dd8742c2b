// ABOUTME: Core data models for the pantry recipe resolver
// ABOUTME: Re-exports recipes, dietary restrictions, selections, and resolution results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data shared by the engine and its callers. Everything here is
//! immutable once built and serializes to JSON for the CLI.

mod dietary;
mod recipe;
mod resolution;
mod selection;

pub use dietary::{DietaryRestriction, DietaryRestrictionSet};
pub use recipe::{Recipe, RecipeCustomization, SubstitutionSuggestion};
pub use resolution::{Assignment, RankedRecipe, RankedResult, ResolutionReport, ResolvedRecipe};
pub use selection::IngredientSelection;
