// ABOUTME: Recipe service used by front ends: search, customization, and selection menu
// ABOUTME: Normalizes raw labels, runs the orchestrator, and applies the configured result cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::EngineConfig;
use crate::engine::{
    available_ingredients, available_restrictions, customize, DietaryPolicy, RecipeCatalog,
    ResolutionOrchestrator, SubstitutionTable,
};
use pantry_core::models::{
    DietaryRestrictionSet, IngredientSelection, RecipeCustomization, ResolutionReport,
};
use serde::{Deserialize, Serialize};
use tracing::{field, instrument, Span};

/// Choices offered to a user before a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMenu {
    /// Ingredients the user can pick
    pub ingredients: Vec<String>,
    /// Dietary restriction labels the user can pick
    pub restrictions: Vec<String>,
}

/// Front-end facade over the engine and its static data
#[derive(Debug, Clone)]
pub struct RecipeService {
    catalog: &'static RecipeCatalog,
    table: &'static SubstitutionTable,
    policy: DietaryPolicy,
    config: EngineConfig,
}

impl RecipeService {
    /// Service over the built-in catalog with the given configuration
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_data(config, RecipeCatalog::builtin(), SubstitutionTable::builtin())
    }

    /// Service over caller-provided static data
    #[must_use]
    pub const fn with_data(
        config: EngineConfig,
        catalog: &'static RecipeCatalog,
        table: &'static SubstitutionTable,
    ) -> Self {
        Self {
            catalog,
            table,
            policy: DietaryPolicy::standard(),
            config,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rank and resolve recipes for raw ingredient and restriction inputs
    ///
    /// Blank restriction labels are dropped, so a request with none selected
    /// runs unconstrained.
    #[must_use]
    #[instrument(skip_all, fields(ingredients = field::Empty, restrictions = field::Empty))]
    pub fn find_recipes<I, S, R, L>(&self, ingredients: I, restriction_labels: R) -> ResolutionReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let selection: IngredientSelection = ingredients.into_iter().collect();
        let restrictions = DietaryRestrictionSet::from_labels(restriction_labels);

        let span = Span::current();
        span.record("ingredients", selection.len());
        span.record("restrictions", restrictions.len());

        let mut recipes = ResolutionOrchestrator::new(self.catalog, self.table, &self.policy)
            .build_results(&selection, &restrictions);
        self.config.truncate(&mut recipes);

        ResolutionReport {
            selected_ingredients: selection.into(),
            restrictions,
            recipes,
        }
    }

    /// Customization view for one recipe name
    #[must_use]
    pub fn customize(&self, recipe_name: &str) -> RecipeCustomization {
        customize(recipe_name, self.catalog)
    }

    /// Ingredients and restrictions offered to the user
    #[must_use]
    pub fn selection_menu(&self) -> SelectionMenu {
        SelectionMenu {
            ingredients: available_ingredients()
                .iter()
                .map(|&i| i.to_owned())
                .collect(),
            restrictions: available_restrictions()
                .iter()
                .map(|&r| r.to_owned())
                .collect(),
        }
    }
}

impl Default for RecipeService {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
