// ABOUTME: Resolution engine outputs: assignments, rankings, and resolved recipes
// ABOUTME: Defines Assignment, RankedRecipe, RankedResult, ResolvedRecipe, and ResolutionReport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{DietaryRestrictionSet, Recipe};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::vec;

/// One chosen ingredient per position of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment(Vec<String>);

impl Assignment {
    /// Wrap a complete ingredient assignment
    #[must_use]
    pub const fn new(ingredients: Vec<String>) -> Self {
        Self(ingredients)
    }

    /// Take the ingredient names out
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Assignment {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Assignment> for Vec<String> {
    fn from(assignment: Assignment) -> Self {
        assignment.0
    }
}

/// A recipe name with its overlap score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRecipe {
    /// Catalog recipe name
    pub name: String,
    /// How many of the recipe's ingredients were selected
    pub match_count: usize,
}

/// Recipes ordered by descending match count, ties in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult(Vec<RankedRecipe>);

impl RankedResult {
    /// Wrap an already ordered ranking
    #[must_use]
    pub const fn new(ranked: Vec<RankedRecipe>) -> Self {
        Self(ranked)
    }

    /// Recipe names in rank order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|r| r.name.as_str())
    }
}

impl Deref for RankedResult {
    type Target = [RankedRecipe];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for RankedResult {
    type Item = RankedRecipe;
    type IntoIter = vec::IntoIter<RankedRecipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Final, externally visible recipe after ranking and substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRecipe {
    /// Catalog recipe name
    pub name: String,
    /// Original ingredients, or the substituted assignment
    pub ingredients: Vec<String>,
    /// Preparation time label
    pub prep_time: String,
    /// Cooking instructions
    pub instructions: String,
    /// True when at least one ingredient differs from the catalog recipe
    pub substituted: bool,
}

impl ResolvedRecipe {
    /// Recipe with its catalog ingredients untouched
    #[must_use]
    pub fn unmodified(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            prep_time: recipe.prep_time.clone(),
            instructions: recipe.instructions.clone(),
            substituted: false,
        }
    }

    /// Recipe with a resolver-produced assignment
    #[must_use]
    pub fn with_assignment(recipe: &Recipe, assignment: Assignment) -> Self {
        let ingredients = assignment.into_inner();
        Self {
            substituted: ingredients != recipe.ingredients,
            name: recipe.name.clone(),
            ingredients,
            prep_time: recipe.prep_time.clone(),
            instructions: recipe.instructions.clone(),
        }
    }
}

/// Everything a results view needs: the request echo and the resolved list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// Ingredients the user selected, first-seen order
    pub selected_ingredients: Vec<String>,
    /// Restrictions applied
    pub restrictions: DietaryRestrictionSet,
    /// Resolved recipes in rank order
    pub recipes: Vec<ResolvedRecipe>,
}
