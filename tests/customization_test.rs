// ABOUTME: Integration tests for single-recipe customization lookup
// ABOUTME: Tests found and unknown recipes and the fixed suggestion list
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use common::tied_catalog;
use pantry_resolver::engine::{customization_table, customize, RecipeCatalog, SubstitutionTable};

#[test]
fn test_customize_known_recipe() {
    let customization = customize("Garlic Tomato", RecipeCatalog::builtin());

    assert!(customization.is_found());
    let recipe = customization.recipe.unwrap();
    assert_eq!(recipe.ingredients, vec!["Garlic", "Tomato"]);
    assert_eq!(recipe.prep_time, "15 minutes");
}

#[test]
fn test_customize_unknown_recipe_still_lists_suggestions() {
    let customization = customize("Beef Wellington", RecipeCatalog::builtin());

    assert!(!customization.is_found());
    assert!(customization.recipe.is_none());
    assert_eq!(customization.suggestions.len(), 3);
}

#[test]
fn test_customize_name_match_is_exact() {
    assert!(!customize("garlic tomato", RecipeCatalog::builtin()).is_found());
    assert!(!customize(" Garlic Tomato", RecipeCatalog::builtin()).is_found());
}

#[test]
fn test_suggestions_follow_display_order() {
    let customization = customize("Chicken Bowl", RecipeCatalog::builtin());
    let ingredients: Vec<&str> = customization
        .suggestions
        .iter()
        .map(|s| s.ingredient.as_str())
        .collect();

    assert_eq!(ingredients, vec!["Chicken", "Cheese", "Spinach"]);
    assert_eq!(
        customization.suggestions[1].alternatives,
        vec!["Vegan Cheese", "Nutritional Yeast"]
    );
}

#[test]
fn test_suggestions_are_independent_of_catalog() {
    let builtin = customize("Chicken Bowl", RecipeCatalog::builtin());
    let custom = customize("Cheese Toast", &tied_catalog());

    assert!(custom.is_found());
    assert_eq!(builtin.suggestions, custom.suggestions);
}

#[test]
fn test_customization_table_never_offers_broccoli() {
    // The resolver table covers Broccoli; the customization view does not
    assert!(SubstitutionTable::builtin().has_entry("Broccoli"));
    assert!(customization_table()
        .iter()
        .all(|(ingredient, _)| *ingredient != "Broccoli"));
}
