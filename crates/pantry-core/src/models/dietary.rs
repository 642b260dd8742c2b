// ABOUTME: Dietary restriction labels and the per-request restriction set
// ABOUTME: Parses UI labels into typed restrictions with blank-label normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::dietary_labels;
use serde::{Deserialize, Serialize};
use std::collections::btree_set::{self, BTreeSet};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Dietary restriction selected by the user
///
/// Serialized as its display label (`"Vegan"`, `"Gluten-Free"`, or the custom text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietaryRestriction {
    /// No animal products
    Vegan,
    /// No gluten-containing ingredients
    GlutenFree,
    /// Any other label; carried through but matches no built-in rule
    Custom(String),
}

impl DietaryRestriction {
    /// Parse a UI label, returning `None` for blank input
    ///
    /// Only the exact labels `"Vegan"` and `"Gluten-Free"` (surrounding
    /// whitespace aside) select the built-in restrictions. Any other text,
    /// including `"vegan"` or `"gluten free"`, is kept as a custom label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(match trimmed {
            dietary_labels::VEGAN => Self::Vegan,
            dietary_labels::GLUTEN_FREE => Self::GlutenFree,
            _ => Self::Custom(trimmed.to_owned()),
        })
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Vegan => dietary_labels::VEGAN,
            Self::GlutenFree => dietary_labels::GLUTEN_FREE,
            Self::Custom(label) => label,
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DietaryRestriction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s).unwrap_or_else(|| Self::Custom(s.to_owned())))
    }
}

impl From<String> for DietaryRestriction {
    fn from(label: String) -> Self {
        Self::from_label(&label).unwrap_or(Self::Custom(label))
    }
}

impl From<DietaryRestriction> for String {
    fn from(restriction: DietaryRestriction) -> Self {
        match restriction {
            DietaryRestriction::Custom(label) => label,
            other => other.label().to_owned(),
        }
    }
}

/// Restrictions active for one request. Empty means unconstrained.
///
/// Deserializes through [`DietaryRestrictionSet::from_labels`], so blank
/// labels in JSON input are dropped the same way.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct DietaryRestrictionSet {
    restrictions: BTreeSet<DietaryRestriction>,
}

impl DietaryRestrictionSet {
    /// The unconstrained set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            restrictions: BTreeSet::new(),
        }
    }

    /// Build a set from raw UI labels, dropping blank labels and duplicates
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .filter_map(|label| DietaryRestriction::from_label(label.as_ref()))
            .collect()
    }

    /// Add a restriction; returns false if it was already present
    pub fn insert(&mut self, restriction: DietaryRestriction) -> bool {
        self.restrictions.insert(restriction)
    }

    /// Check whether a restriction is active
    #[must_use]
    pub fn contains(&self, restriction: &DietaryRestriction) -> bool {
        self.restrictions.contains(restriction)
    }

    /// Whether no restriction is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty()
    }

    /// Number of active restrictions
    #[must_use]
    pub fn len(&self) -> usize {
        self.restrictions.len()
    }

    /// Iterate restrictions in a stable order
    pub fn iter(&self) -> btree_set::Iter<'_, DietaryRestriction> {
        self.restrictions.iter()
    }

    /// Labels of the active restrictions, for logs and display
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.restrictions
            .iter()
            .map(|r| r.label().to_owned())
            .collect()
    }
}

impl FromIterator<DietaryRestriction> for DietaryRestrictionSet {
    fn from_iter<T: IntoIterator<Item = DietaryRestriction>>(iter: T) -> Self {
        Self {
            restrictions: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<String>> for DietaryRestrictionSet {
    fn from(labels: Vec<String>) -> Self {
        Self::from_labels(labels)
    }
}

impl From<DietaryRestrictionSet> for Vec<String> {
    fn from(set: DietaryRestrictionSet) -> Self {
        set.restrictions.into_iter().map(String::from).collect()
    }
}

impl<'a> IntoIterator for &'a DietaryRestrictionSet {
    type Item = &'a DietaryRestriction;
    type IntoIter = btree_set::Iter<'a, DietaryRestriction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing_variants() {
        assert_eq!(
            DietaryRestriction::from_label("Vegan"),
            Some(DietaryRestriction::Vegan)
        );
        assert_eq!(
            DietaryRestriction::from_label(" Gluten-Free "),
            Some(DietaryRestriction::GlutenFree)
        );
        assert_eq!(
            DietaryRestriction::from_label("vegan"),
            Some(DietaryRestriction::Custom("vegan".to_owned()))
        );
        assert_eq!(
            DietaryRestriction::from_label("gluten free"),
            Some(DietaryRestriction::Custom("gluten free".to_owned()))
        );
        assert_eq!(
            DietaryRestriction::from_label("Nut-Free"),
            Some(DietaryRestriction::Custom("Nut-Free".to_owned()))
        );
        assert_eq!(DietaryRestriction::from_label("   "), None);
    }

    #[test]
    fn test_blank_labels_normalize_to_empty_set() {
        let set = DietaryRestrictionSet::from_labels(["", "  "]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_deduplicates_repeated_labels() {
        let set = DietaryRestrictionSet::from_labels(["Vegan", " Vegan", "Gluten-Free"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.labels(), vec!["Vegan", "Gluten-Free"]);
    }

    #[test]
    fn test_case_variants_stay_distinct() {
        let set = DietaryRestrictionSet::from_labels(["Vegan", "vegan"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&DietaryRestriction::Custom("vegan".to_owned())));
    }

    #[test]
    fn test_deserialize_drops_blank_labels() {
        let parsed: DietaryRestrictionSet =
            serde_json::from_str(r#"["", "  "]"#).unwrap_or_else(|_| {
                DietaryRestrictionSet::from_labels([dietary_labels::VEGAN])
            });
        assert!(parsed.is_empty());

        let mixed: DietaryRestrictionSet =
            serde_json::from_str(r#"[" ", "Gluten-Free"]"#).unwrap_or_default();
        assert_eq!(mixed.labels(), vec!["Gluten-Free"]);
    }

    #[test]
    fn test_serde_uses_labels() {
        let set = DietaryRestrictionSet::from_labels(["Gluten-Free", "Halal"]);
        let json = serde_json::to_string(&set).unwrap_or_default();
        assert_eq!(json, r#"["Gluten-Free","Halal"]"#);

        let parsed: DietaryRestrictionSet =
            serde_json::from_str(r#"["Vegan"]"#).unwrap_or_default();
        assert!(parsed.contains(&DietaryRestriction::Vegan));
    }
}
