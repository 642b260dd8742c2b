// ABOUTME: Recipe resolution engine: catalog, dietary policy, ranking, and substitution search
// ABOUTME: Pure synchronous functions over immutable process-wide catalog data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Resolution Engine
//!
//! Matches a user's ingredient selection against the recipe catalog and, when
//! dietary restrictions are active, rewrites each ranked recipe into a
//! compliant variant.
//!
//! ## Flow
//!
//! 1. [`ranking::rank`] scores recipes by ingredient overlap (greedy, stable)
//! 2. [`orchestrator::ResolutionOrchestrator`] walks the ranking in order
//! 3. [`substitution::SubstitutionResolver`] searches for a compliant assignment
//!    when restrictions are present; infeasible recipes are dropped
//!
//! Every request is a pure function of its inputs and the read-only catalog,
//! so requests can run concurrently without locking.
//!
//! ## Example
//!
//! ```rust
//! use pantry_resolver::engine::{build_results, RecipeCatalog, SubstitutionTable};
//! use pantry_resolver::models::{DietaryRestrictionSet, IngredientSelection};
//!
//! let selection: IngredientSelection = ["Chicken", "Rice"].into_iter().collect();
//! let restrictions = DietaryRestrictionSet::from_labels(["Vegan"]);
//! let results = build_results(
//!     &selection,
//!     &restrictions,
//!     RecipeCatalog::builtin(),
//!     SubstitutionTable::builtin(),
//! );
//! assert_eq!(results[0].ingredients, vec!["Tofu", "Rice"]);
//! ```

/// Static recipe catalog and substitution tables
pub mod catalog;
/// Single-recipe customization lookup
pub mod customization;
/// Per-ingredient dietary policy
pub mod dietary;
/// Ranking plus substitution composed into final results
pub mod orchestrator;
/// Greedy overlap ranking
pub mod ranking;
/// Backtracking substitution search
pub mod substitution;

pub use catalog::{
    available_ingredients, available_restrictions, customization_table, RecipeCatalog,
    SubstitutionTable,
};
pub use customization::customize;
pub use dietary::{satisfies, DietaryPolicy, ExclusionRule, IngredientPolicy};
pub use orchestrator::{build_results, ResolutionOrchestrator};
pub use ranking::{match_count, rank};
pub use substitution::{resolve, Resolution, SubstitutionResolver};
