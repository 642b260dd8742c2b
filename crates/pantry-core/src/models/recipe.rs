// ABOUTME: Recipe record and customization view models
// ABOUTME: Defines Recipe, SubstitutionSuggestion, and RecipeCustomization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A catalog recipe. The name is the catalog key.
///
/// `Default` is the empty record handed out for unknown names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe name
    pub name: String,
    /// Ingredient names in recipe order
    pub ingredients: Vec<String>,
    /// Preparation time label (e.g. "30 minutes")
    #[serde(alias = "time")]
    pub prep_time: String,
    /// Free-text cooking instructions
    pub instructions: String,
}

impl Recipe {
    /// Create a recipe from borrowed or owned strings
    #[must_use]
    pub fn new<I, S>(
        name: impl Into<String>,
        ingredients: I,
        prep_time: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            prep_time: prep_time.into(),
            instructions: instructions.into(),
        }
    }

    /// Whether this is the empty placeholder record
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.ingredients.is_empty()
    }
}

/// Alternatives offered for one ingredient on the customization view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionSuggestion {
    /// Ingredient being replaced
    pub ingredient: String,
    /// Suggested replacements, most preferred first
    pub alternatives: Vec<String>,
}

/// Result of a single-recipe customization lookup
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeCustomization {
    /// Static recipe data, `None` when the name is not in the catalog
    pub recipe: Option<Recipe>,
    /// Fixed presentation table of substitution ideas
    pub suggestions: Vec<SubstitutionSuggestion>,
}

impl RecipeCustomization {
    /// Whether the requested recipe was found
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.recipe.is_some()
    }
}
