// ABOUTME: User ingredient selection with exact-string membership
// ABOUTME: De-duplicates selected names while keeping first-seen order for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ingredients the user has on hand.
///
/// Membership is exact string comparison. Blank entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct IngredientSelection {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl IngredientSelection {
    /// Empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient; returns false for blanks and repeats
    pub fn insert(&mut self, ingredient: impl Into<String>) -> bool {
        let ingredient = ingredient.into();
        if ingredient.trim().is_empty() || self.members.contains(&ingredient) {
            return false;
        }
        self.members.insert(ingredient.clone());
        self.ordered.push(ingredient);
        true
    }

    /// Whether `ingredient` was selected
    #[must_use]
    pub fn contains(&self, ingredient: &str) -> bool {
        self.members.contains(ingredient)
    }

    /// Whether nothing was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Number of distinct selected ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Selected ingredients in the order they were first given
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IngredientSelection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut selection = Self::new();
        for ingredient in iter {
            selection.insert(ingredient);
        }
        selection
    }
}

impl From<Vec<String>> for IngredientSelection {
    fn from(ingredients: Vec<String>) -> Self {
        ingredients.into_iter().collect()
    }
}

impl From<IngredientSelection> for Vec<String> {
    fn from(selection: IngredientSelection) -> Self {
        selection.ordered
    }
}
