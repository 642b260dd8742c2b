// ABOUTME: Greedy recipe ranking by raw ingredient overlap with the user's selection
// ABOUTME: Stable descending sort so ties keep catalog order; zero scores are dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::catalog::RecipeCatalog;
use pantry_core::models::{IngredientSelection, RankedRecipe, RankedResult, Recipe};
use tracing::debug;

/// Count the positions of `recipe` whose ingredient is in `selection`
///
/// The score is not normalized by recipe size and ignores ingredients the
/// recipe needs but the user does not have.
#[must_use]
pub fn match_count(recipe: &Recipe, selection: &IngredientSelection) -> usize {
    recipe
        .ingredients
        .iter()
        .filter(|ingredient| selection.contains(ingredient))
        .count()
}

/// Rank every catalog recipe by overlap with `selection`
#[must_use]
pub fn rank(selection: &IngredientSelection, catalog: &RecipeCatalog) -> RankedResult {
    let mut scored: Vec<RankedRecipe> = catalog
        .iter()
        .map(|recipe| RankedRecipe {
            name: recipe.name.clone(),
            match_count: match_count(recipe, selection),
        })
        .collect();

    // `sort_by` is stable: equal scores stay in catalog order
    scored.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    scored.retain(|r| r.match_count > 0);

    debug!(
        selected = selection.len(),
        ranked = scored.len(),
        top = scored.first().map(|r| r.name.as_str()),
        "Ranked recipes by ingredient overlap"
    );

    RankedResult::new(scored)
}
