// ABOUTME: Single-recipe customization lookup with fixed substitution suggestions
// ABOUTME: Presentation-only: surfaces candidate lists without running the resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::catalog::{customization_table, RecipeCatalog};
use pantry_core::models::{RecipeCustomization, SubstitutionSuggestion};
use tracing::debug;

/// Suggestions shown next to every recipe on the customization view
#[must_use]
pub fn suggestions() -> Vec<SubstitutionSuggestion> {
    customization_table()
        .iter()
        .map(|(ingredient, alternatives)| SubstitutionSuggestion {
            ingredient: (*ingredient).to_owned(),
            alternatives: alternatives.iter().map(|&a| a.to_owned()).collect(),
        })
        .collect()
}

/// Look up `name` for customization
///
/// Unknown names yield a customization with no recipe; this never fails.
#[must_use]
pub fn customize(name: &str, catalog: &RecipeCatalog) -> RecipeCustomization {
    let recipe = catalog.get(name).cloned();
    if recipe.is_none() {
        debug!(recipe = %name, "Customization requested for unknown recipe");
    }

    RecipeCustomization {
        recipe,
        suggestions: suggestions(),
    }
}
