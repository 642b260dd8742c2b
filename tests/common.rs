// ABOUTME: Shared test utilities for resolver integration tests
// ABOUTME: Provides selection, restriction, and catalog builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pantry_resolver`

use pantry_resolver::engine::RecipeCatalog;
use pantry_resolver::models::{DietaryRestrictionSet, IngredientSelection, Recipe};

/// Selection from string literals
pub fn selection(ingredients: &[&str]) -> IngredientSelection {
    ingredients.iter().copied().collect()
}

/// Restriction set from UI labels
pub fn restrictions(labels: &[&str]) -> DietaryRestrictionSet {
    DietaryRestrictionSet::from_labels(labels)
}

/// The unconstrained restriction set
pub fn unrestricted() -> DietaryRestrictionSet {
    DietaryRestrictionSet::new()
}

/// Fetch a built-in recipe by name
pub fn builtin_recipe(name: &str) -> &'static Recipe {
    RecipeCatalog::builtin()
        .get(name)
        .expect("built-in recipe should exist")
}

/// Catalog with recipes that tie on score, for ordering tests
pub fn tied_catalog() -> RecipeCatalog {
    RecipeCatalog::from_recipes(vec![
        Recipe::new("Onion Rings", ["Onion", "Flour"], "20 minutes", "Fry."),
        Recipe::new("French Onion Soup", ["Onion", "Stock", "Cheese"], "60 minutes", "Simmer."),
        Recipe::new("Cheese Toast", ["Bread", "Cheese"], "5 minutes", "Toast."),
        Recipe::new("Plain Bread", ["Bread"], "1 minute", "Slice."),
    ])
    .expect("tied catalog is valid")
}
