// ABOUTME: Integration tests for greedy recipe ranking
// ABOUTME: Tests overlap scoring, stable tie ordering, and zero-score filtering
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use common::{selection, tied_catalog};
use pantry_resolver::engine::{match_count, rank, RecipeCatalog};
use pantry_resolver::models::Recipe;

#[test]
fn test_chicken_and_rice_rank_chicken_bowl_first() {
    let ranked = rank(&selection(&["Chicken", "Rice"]), RecipeCatalog::builtin());

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].name, "Chicken Bowl");
    assert_eq!(ranked[0].match_count, 2);
}

#[test]
fn test_empty_selection_ranks_nothing() {
    let ranked = rank(&selection(&[]), RecipeCatalog::builtin());
    assert!(ranked.is_empty());
}

#[test]
fn test_descending_scores_with_catalog_order_ties() {
    // Potato Soup: Potato, Onion, Garlic, Carrot -> 4
    // Vegetable Stir Fry: Carrot, Onion -> 2
    // Spinach Potato Bites: Potato -> 1
    // Garlic Tomato: Garlic -> 1
    let ranked = rank(
        &selection(&["Potato", "Onion", "Garlic", "Carrot"]),
        RecipeCatalog::builtin(),
    );

    let names: Vec<&str> = ranked.names().collect();
    assert_eq!(
        names,
        vec![
            "Potato Soup",
            "Vegetable Stir Fry",
            "Spinach Potato Bites",
            "Garlic Tomato",
        ]
    );
    let scores: Vec<usize> = ranked.iter().map(|r| r.match_count).collect();
    assert_eq!(scores, vec![4, 2, 1, 1]);
}

#[test]
fn test_ties_keep_catalog_order() {
    let catalog = tied_catalog();
    let ranked = rank(&selection(&["Onion", "Cheese", "Bread"]), &catalog);

    let names: Vec<&str> = ranked.names().collect();
    assert_eq!(
        names,
        vec!["French Onion Soup", "Cheese Toast", "Onion Rings", "Plain Bread"]
    );
}

#[test]
fn test_score_is_not_normalized_by_recipe_size() {
    // One shared ingredient scores 1 whether the recipe has 1 or 5 ingredients
    let catalog = tied_catalog();
    let ranked = rank(&selection(&["Bread"]), &catalog);
    let scores: Vec<(&str, usize)> = ranked
        .iter()
        .map(|r| (r.name.as_str(), r.match_count))
        .collect();
    assert_eq!(scores, vec![("Cheese Toast", 1), ("Plain Bread", 1)]);
}

#[test]
fn test_duplicate_recipe_ingredients_each_count() {
    let recipe = Recipe::new("Double Garlic", ["Garlic", "Garlic", "Oil"], "5 minutes", "Fry.");
    assert_eq!(match_count(&recipe, &selection(&["Garlic"])), 2);
}

#[test]
fn test_rank_is_deterministic() {
    let picked = selection(&["Broccoli", "Spinach", "Cheese", "Potato"]);
    let first = rank(&picked, RecipeCatalog::builtin());
    let second = rank(&picked, RecipeCatalog::builtin());
    assert_eq!(first, second);
}

#[test]
fn test_unknown_ingredients_score_zero() {
    let ranked = rank(&selection(&["Eggplant"]), RecipeCatalog::builtin());
    assert!(ranked.is_empty());
}
