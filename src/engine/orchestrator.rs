// ABOUTME: Composes ranking and substitution search into the final recipe list
// ABOUTME: Skips recipes with no compliant substitution and passes through when unrestricted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::catalog::{RecipeCatalog, SubstitutionTable};
use super::dietary::{DietaryPolicy, IngredientPolicy};
use super::ranking::rank;
use super::substitution::{Resolution, SubstitutionResolver};
use pantry_core::models::{DietaryRestrictionSet, IngredientSelection, ResolvedRecipe};
use tracing::{debug, info, warn};

/// Ranks recipes and rewrites their ingredients under dietary restrictions
#[derive(Debug, Clone, Copy)]
pub struct ResolutionOrchestrator<'a, P = DietaryPolicy> {
    catalog: &'a RecipeCatalog,
    resolver: SubstitutionResolver<'a, P>,
}

impl<'a, P: IngredientPolicy> ResolutionOrchestrator<'a, P> {
    /// Create an orchestrator over a catalog, substitution table, and policy
    #[must_use]
    pub const fn new(
        catalog: &'a RecipeCatalog,
        table: &'a SubstitutionTable,
        policy: &'a P,
    ) -> Self {
        Self {
            catalog,
            resolver: SubstitutionResolver::new(table, policy),
        }
    }

    /// Build the resolved recipe list in rank order
    ///
    /// With no restrictions every ranked recipe is returned with its catalog
    /// ingredients and the resolver is not consulted. With restrictions each
    /// recipe is resolved; recipes without a compliant assignment are left out.
    #[must_use]
    pub fn build_results(
        &self,
        selection: &IngredientSelection,
        restrictions: &DietaryRestrictionSet,
    ) -> Vec<ResolvedRecipe> {
        let ranked = rank(selection, self.catalog);
        let mut results = Vec::with_capacity(ranked.len());

        for entry in ranked {
            let Some(recipe) = self.catalog.get(&entry.name) else {
                warn!(recipe = %entry.name, "Ranked recipe missing from catalog");
                continue;
            };

            if restrictions.is_empty() {
                results.push(ResolvedRecipe::unmodified(recipe));
                continue;
            }

            match self.resolver.resolve(recipe, restrictions) {
                Resolution::Found(assignment) => {
                    results.push(ResolvedRecipe::with_assignment(recipe, assignment));
                }
                Resolution::NotFound => {
                    debug!(
                        recipe = %recipe.name,
                        match_count = entry.match_count,
                        "Skipping recipe with no compliant substitution"
                    );
                }
            }
        }

        info!(
            selected = selection.len(),
            restrictions = restrictions.len(),
            resolved = results.len(),
            "Resolved recipe results"
        );

        results
    }
}

/// Rank `catalog` against `selection` and resolve under `restrictions` with
/// the standard dietary policy
#[must_use]
pub fn build_results(
    selection: &IngredientSelection,
    restrictions: &DietaryRestrictionSet,
    catalog: &RecipeCatalog,
    table: &SubstitutionTable,
) -> Vec<ResolvedRecipe> {
    let policy = DietaryPolicy::standard();
    ResolutionOrchestrator::new(catalog, table, &policy).build_results(selection, restrictions)
}
