// ABOUTME: Catalog-specific error types raised while assembling the recipe catalog
// ABOUTME: Provides structured errors that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::error::Error;
use std::fmt;

/// Errors raised when a recipe catalog violates its construction invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two recipes share the same name
    DuplicateRecipe {
        /// The repeated recipe name
        name: String,
    },
    /// A recipe name is empty or whitespace
    BlankRecipeName {
        /// Position of the offending recipe in the input
        position: usize,
    },
    /// A recipe lists an empty ingredient name
    BlankIngredient {
        /// Recipe holding the blank ingredient
        recipe: String,
        /// Position of the blank ingredient in the recipe
        position: usize,
    },
}

impl CatalogError {
    /// Create a "duplicate recipe" error
    #[must_use]
    pub fn duplicate_recipe(name: impl Into<String>) -> Self {
        Self::DuplicateRecipe { name: name.into() }
    }

    /// Create a "blank recipe name" error
    #[must_use]
    pub const fn blank_recipe_name(position: usize) -> Self {
        Self::BlankRecipeName { position }
    }

    /// Create a "blank ingredient" error
    #[must_use]
    pub fn blank_ingredient(recipe: impl Into<String>, position: usize) -> Self {
        Self::BlankIngredient {
            recipe: recipe.into(),
            position,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRecipe { name } => {
                write!(f, "Recipe '{name}' is defined more than once")
            }
            Self::BlankRecipeName { position } => {
                write!(f, "Recipe at position {position} has a blank name")
            }
            Self::BlankIngredient { recipe, position } => {
                write!(
                    f,
                    "Recipe '{recipe}' has a blank ingredient at position {position}"
                )
            }
        }
    }
}

impl Error for CatalogError {}
