// ABOUTME: Backtracking substitution search producing a dietarily compliant ingredient list
// ABOUTME: Depth-first over recipe positions, candidates tried in table preference order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Substitution Resolver
//!
//! Walks a recipe's ingredient positions left to right. At each position the
//! candidates from the [`SubstitutionTable`] are tried in preference order and
//! the first one the policy accepts is committed before moving on. When a
//! position has no acceptable candidate the search backs up and tries the next
//! candidate one level higher.
//!
//! The first complete assignment wins. There is no cost function: the result
//! is the earliest feasible assignment in candidate order, not a "best" one.
//! Policies judge one ingredient at a time, so no memoization or cross-position
//! pruning is needed and the search space is bounded by the product of
//! candidate-list lengths.

use super::catalog::SubstitutionTable;
use super::dietary::{DietaryPolicy, IngredientPolicy};
use pantry_core::models::{Assignment, DietaryRestrictionSet, Recipe};
use tracing::{debug, trace};

/// Outcome of a substitution search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A full-length assignment where every ingredient satisfies the policy
    Found(Assignment),
    /// No assignment exists under the restrictions
    NotFound,
}

impl Resolution {
    /// The assignment, if one was found
    #[must_use]
    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            Self::Found(assignment) => Some(assignment),
            Self::NotFound => None,
        }
    }

    /// Whether an assignment was found
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Backtracking resolver over a substitution table and an ingredient policy
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionResolver<'a, P = DietaryPolicy> {
    table: &'a SubstitutionTable,
    policy: &'a P,
}

impl<'a, P: IngredientPolicy> SubstitutionResolver<'a, P> {
    /// Create a resolver
    #[must_use]
    pub const fn new(table: &'a SubstitutionTable, policy: &'a P) -> Self {
        Self { table, policy }
    }

    /// Find the first compliant assignment for `recipe`
    #[must_use]
    pub fn resolve(&self, recipe: &Recipe, restrictions: &DietaryRestrictionSet) -> Resolution {
        let mut partial = Vec::with_capacity(recipe.ingredients.len());

        if self.search(recipe, restrictions, &mut partial) {
            debug!(recipe = %recipe.name, assignment = ?partial, "Substitution search succeeded");
            Resolution::Found(Assignment::new(partial))
        } else {
            debug!(
                recipe = %recipe.name,
                restrictions = ?restrictions.labels(),
                "No compliant substitution exists"
            );
            Resolution::NotFound
        }
    }

    /// Extend `partial` from position `partial.len()`; on failure `partial` is
    /// restored to the length it had on entry.
    fn search(
        &self,
        recipe: &Recipe,
        restrictions: &DietaryRestrictionSet,
        partial: &mut Vec<String>,
    ) -> bool {
        let position = partial.len();
        let Some(ingredient) = recipe.ingredients.get(position) else {
            return true;
        };

        for candidate in self.table.candidates(ingredient) {
            if !self.policy.permits(candidate, restrictions) {
                trace!(recipe = %recipe.name, position, candidate, "Candidate rejected by policy");
                continue;
            }

            partial.push(candidate.to_owned());
            if self.search(recipe, restrictions, partial) {
                return true;
            }
            partial.pop();
            trace!(recipe = %recipe.name, position, candidate, "Backtracking");
        }

        false
    }
}

/// Resolve `recipe` with the built-in table and the standard policy
#[must_use]
pub fn resolve(recipe: &Recipe, restrictions: &DietaryRestrictionSet) -> Resolution {
    let policy = DietaryPolicy::standard();
    SubstitutionResolver::new(SubstitutionTable::builtin(), &policy).resolve(recipe, restrictions)
}
