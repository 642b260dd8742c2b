// ABOUTME: Dietary policy deciding whether one ingredient is allowed under active restrictions
// ABOUTME: Rule-table policy behind a trait so the resolver can take other policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dietary Policy
//!
//! A policy answers one question for one ingredient at a time. It has no
//! notion of recipe position, so the resolver can check each position
//! independently.
//!
//! The standard rule table is intentionally small:
//!
//! | Restriction   | Excluded ingredient |
//! |---------------|---------------------|
//! | `Vegan`       | `Chicken`           |
//! | `Gluten-Free` | `Rice`              |
//!
//! Ingredient names are compared exactly.

use pantry_core::models::{DietaryRestriction, DietaryRestrictionSet};

/// Decides whether an ingredient is acceptable under a restriction set
pub trait IngredientPolicy {
    /// Returns true when `ingredient` may appear under `restrictions`
    fn permits(&self, ingredient: &str, restrictions: &DietaryRestrictionSet) -> bool;
}

/// A single exclusion: `ingredient` is not allowed while `restriction` is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRule {
    /// Restriction that activates the rule
    pub restriction: DietaryRestriction,
    /// Exact ingredient name excluded by the rule
    pub ingredient: &'static str,
}

const STANDARD_RULES: &[ExclusionRule] = &[
    ExclusionRule {
        restriction: DietaryRestriction::Vegan,
        ingredient: "Chicken",
    },
    ExclusionRule {
        restriction: DietaryRestriction::GlutenFree,
        ingredient: "Rice",
    },
];

/// Exclusion-table policy
#[derive(Debug, Clone, Copy)]
pub struct DietaryPolicy {
    rules: &'static [ExclusionRule],
}

impl DietaryPolicy {
    /// The built-in rule table
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            rules: STANDARD_RULES,
        }
    }

    /// A policy over a caller-supplied rule table
    #[must_use]
    pub const fn with_rules(rules: &'static [ExclusionRule]) -> Self {
        Self { rules }
    }

    /// Rules in evaluation order
    #[must_use]
    pub const fn rules(&self) -> &'static [ExclusionRule] {
        self.rules
    }

    /// Returns true when `ingredient` is acceptable under `restrictions`
    ///
    /// An empty restriction set accepts everything.
    #[must_use]
    pub fn satisfies(&self, ingredient: &str, restrictions: &DietaryRestrictionSet) -> bool {
        if restrictions.is_empty() {
            return true;
        }

        !self
            .rules
            .iter()
            .any(|rule| rule.ingredient == ingredient && restrictions.contains(&rule.restriction))
    }
}

impl Default for DietaryPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl IngredientPolicy for DietaryPolicy {
    fn permits(&self, ingredient: &str, restrictions: &DietaryRestrictionSet) -> bool {
        self.satisfies(ingredient, restrictions)
    }
}

/// Check `ingredient` against the standard policy
#[must_use]
pub fn satisfies(ingredient: &str, restrictions: &DietaryRestrictionSet) -> bool {
    DietaryPolicy::standard().satisfies(ingredient, restrictions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_rule_table() {
        const DAIRY_RULES: &[ExclusionRule] = &[ExclusionRule {
            restriction: DietaryRestriction::Vegan,
            ingredient: "Cheese",
        }];
        let policy = DietaryPolicy::with_rules(DAIRY_RULES);
        let vegan = DietaryRestrictionSet::from_labels(["Vegan"]);

        assert!(!policy.satisfies("Cheese", &vegan));
        assert!(policy.satisfies("Chicken", &vegan));
    }

    #[test]
    fn test_custom_label_matches_no_rule() {
        let halal = DietaryRestrictionSet::from_labels(["Halal"]);
        assert!(satisfies("Chicken", &halal));
        assert!(satisfies("Rice", &halal));
    }
}
