// ABOUTME: Static recipe catalog and ingredient substitution tables
// ABOUTME: Built once per process and shared read-only by every resolution request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog
//!
//! The recipe catalog and the canonical substitution table are process-wide
//! immutable data. [`RecipeCatalog::builtin`] and [`SubstitutionTable::builtin`]
//! hand out `&'static` references built on first use; nothing mutates them
//! afterwards.
//!
//! The customization view uses a second, smaller table
//! ([`customization_table`]). It overlaps the canonical table but is kept
//! separate on purpose: it is presentation data and never feeds the resolver.

use pantry_core::constants::dietary_labels;
use pantry_core::errors::{AppResult, CatalogError};
use pantry_core::models::Recipe;
use std::collections::HashMap;
use std::slice;
use std::sync::LazyLock;
use tracing::error;

static BUILTIN_CATALOG: LazyLock<RecipeCatalog> = LazyLock::new(|| {
    RecipeCatalog::from_recipes(builtin_recipes()).unwrap_or_else(|e| {
        error!(error = %e, "Built-in recipe catalog is invalid, serving an empty catalog");
        RecipeCatalog::default()
    })
});

static BUILTIN_SUBSTITUTIONS: LazyLock<SubstitutionTable> = LazyLock::new(|| {
    SubstitutionTable::from_entries([
        ("Chicken", &["Tofu", "Mushrooms"][..]),
        ("Cheese", &["Vegan Cheese", "Nutritional Yeast"][..]),
        ("Spinach", &["Kale", "Lettuce"][..]),
        ("Broccoli", &["Cauliflower", "Brussels Sprouts"][..]),
    ])
});

/// Presentation-only suggestions shown on the customization view, in display order
const CUSTOMIZATION_SUGGESTIONS: &[(&str, &[&str])] = &[
    ("Chicken", &["Tofu", "Mushrooms"]),
    ("Cheese", &["Vegan Cheese", "Nutritional Yeast"]),
    ("Spinach", &["Kale", "Lettuce"]),
];

/// Ingredients offered on the selection screen
const AVAILABLE_INGREDIENTS: &[&str] = &[
    "Chicken", "Rice", "Broccoli", "Cheese", "Spinach", "Tomato", "Onion", "Carrot", "Potato",
    "Garlic", "Eggplant", "Zucchini",
];

/// Restriction labels offered on the selection screen
const AVAILABLE_RESTRICTIONS: &[&str] = &[dietary_labels::VEGAN, dietary_labels::GLUTEN_FREE];

fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Chicken Bowl",
            ["Chicken", "Rice"],
            "30 minutes",
            "Cook rice, grill chicken, and combine.",
        ),
        Recipe::new(
            "Broccoli Sticks",
            ["Broccoli", "Cheese"],
            "20 minutes",
            "Steam broccoli and melt cheese on top.",
        ),
        Recipe::new(
            "Spinach Potato Bites",
            ["Spinach", "Potato"],
            "25 minutes",
            "Boil potatoes, sauté spinach, and combine.",
        ),
        Recipe::new(
            "Garlic Tomato",
            ["Garlic", "Tomato"],
            "15 minutes",
            "Sauté garlic, add tomatoes, and cook for 10 minutes.",
        ),
        Recipe::new(
            "Vegetable Stir Fry",
            ["Broccoli", "Spinach", "Carrot", "Onion", "Zucchini"],
            "40 minutes",
            "Stir fry all veggies in olive oil.",
        ),
        Recipe::new(
            "Potato Soup",
            ["Potato", "Onion", "Garlic", "Carrot"],
            "50 minutes",
            "Boil vegetables and blend them into a smooth soup.",
        ),
    ]
}

/// Recipes keyed by name, iterated in definition order
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl RecipeCatalog {
    /// The process-wide built-in catalog
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_CATALOG
    }

    /// Build a catalog, enforcing unique non-blank names and non-blank ingredients
    ///
    /// # Errors
    ///
    /// Returns an error if a recipe name is blank or repeated, or if a recipe
    /// lists a blank ingredient.
    pub fn from_recipes(recipes: Vec<Recipe>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(recipes.len());

        for (position, recipe) in recipes.iter().enumerate() {
            if recipe.name.trim().is_empty() {
                return Err(CatalogError::blank_recipe_name(position).into());
            }
            if let Some(slot) = recipe.ingredients.iter().position(|i| i.trim().is_empty()) {
                return Err(CatalogError::blank_ingredient(&recipe.name, slot).into());
            }
            if index.insert(recipe.name.clone(), position).is_some() {
                return Err(CatalogError::duplicate_recipe(&recipe.name).into());
            }
        }

        Ok(Self { recipes, index })
    }

    /// Look up a recipe by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.index.get(name).and_then(|&i| self.recipes.get(i))
    }

    /// Recipes in catalog order
    pub fn iter(&self) -> slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Recipe names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(|r| r.name.as_str())
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecipeCatalog {
    type Item = &'a Recipe;
    type IntoIter = slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Base ingredient to ordered replacement candidates (most preferred first)
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    entries: HashMap<String, Vec<String>>,
}

impl SubstitutionTable {
    /// The canonical table used by the resolver
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_SUBSTITUTIONS
    }

    /// Build a table from `(ingredient, candidates)` pairs
    ///
    /// A later pair for the same ingredient replaces an earlier one.
    #[must_use]
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let entries = entries
            .into_iter()
            .map(|(base, candidates)| {
                (
                    base.to_owned(),
                    candidates.iter().map(|&c| c.to_owned()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Candidates for `ingredient` in preference order
    ///
    /// An ingredient without an entry has exactly one candidate: itself.
    #[must_use]
    pub fn candidates<'a>(&'a self, ingredient: &'a str) -> Vec<&'a str> {
        self.entries.get(ingredient).map_or_else(
            || vec![ingredient],
            |candidates| candidates.iter().map(String::as_str).collect(),
        )
    }

    /// Whether `ingredient` has an explicit entry
    #[must_use]
    pub fn has_entry(&self, ingredient: &str) -> bool {
        self.entries.contains_key(ingredient)
    }

    /// Number of explicit entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no explicit entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The presentation-only suggestion table, in display order
#[must_use]
pub fn customization_table() -> &'static [(&'static str, &'static [&'static str])] {
    CUSTOMIZATION_SUGGESTIONS
}

/// Ingredients a user can pick from
#[must_use]
pub fn available_ingredients() -> &'static [&'static str] {
    AVAILABLE_INGREDIENTS
}

/// Dietary restriction labels a user can pick from
#[must_use]
pub fn available_restrictions() -> &'static [&'static str] {
    AVAILABLE_RESTRICTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::errors::ErrorCode;

    #[test]
    fn test_builtin_catalog_order() {
        let names: Vec<&str> = RecipeCatalog::builtin().names().collect();
        assert_eq!(
            names,
            vec![
                "Chicken Bowl",
                "Broccoli Sticks",
                "Spinach Potato Bites",
                "Garlic Tomato",
                "Vegetable Stir Fry",
                "Potato Soup",
            ]
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let recipes = vec![
            Recipe::new("Soup", ["Onion"], "5 minutes", "Boil."),
            Recipe::new("Soup", ["Carrot"], "5 minutes", "Boil."),
        ];
        let err = RecipeCatalog::from_recipes(recipes).err();
        assert_eq!(err.map(|e| e.code), Some(ErrorCode::ResourceAlreadyExists));
    }

    #[test]
    fn test_blank_ingredient_rejected() {
        let recipes = vec![Recipe::new("Soup", ["Onion", " "], "5 minutes", "Boil.")];
        let err = RecipeCatalog::from_recipes(recipes).err();
        assert_eq!(err.map(|e| e.code), Some(ErrorCode::InvalidInput));
    }

    #[test]
    fn test_unknown_ingredient_is_its_own_candidate() {
        let table = SubstitutionTable::builtin();
        assert_eq!(table.candidates("Rice"), vec!["Rice"]);
        assert_eq!(table.candidates("Chicken"), vec!["Tofu", "Mushrooms"]);
    }
}
