//! Reference tables consumed by the component calculators.
//!
//! Tables are loaded once at engine construction and are immutable for the
//! duration of any analysis run. A compact built-in set ships as the
//! default; deployments with richer curated tables load them as JSON via
//! [`ReferenceData::from_json_str`].

pub mod effects;

mod defaults;

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One adjustment carried by an interaction rule
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct InteractionModifier {
    /// Effect id receiving the adjustment
    pub target: String,
    /// Fraction of the interaction strength added to the target
    pub modifier: f64,
}

/// A pairwise effect interaction, keyed in the table by "a+b".
///
/// A rule with no explicit modifiers is a mutual-reinforcement rule: both
/// participants are boosted instead of named targets.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct InteractionRule {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub modifies: Vec<InteractionModifier>,
}

/// A flavor subcategory: the tags it covers, the effects they feed, and the
/// per-tag intensity contributed to each of those effects
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FlavorSubcategory {
    pub flavors: Vec<String>,
    pub effects: Vec<String>,
    pub intensity: f64,
}

/// A curated processing method entry with per-effect weights
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProcessingEntry {
    pub effects: BTreeMap<String, f64>,
    pub intensity: f64,
    pub category: String,
    pub description: String,
}

/// Effect deltas keyed by band name, for each geographic dimension
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GeographyTable {
    pub climate_zones: BTreeMap<String, BTreeMap<String, f64>>,
    pub seasons: BTreeMap<String, BTreeMap<String, f64>>,
    pub altitude_bands: BTreeMap<String, BTreeMap<String, f64>>,
    pub humidity_bands: BTreeMap<String, BTreeMap<String, f64>>,
}

/// The full reference data set: one table per component plus the
/// interaction rules
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ReferenceData {
    /// Tea type -> base effect scores
    pub tea_types: BTreeMap<String, BTreeMap<String, f64>>,
    /// Flavor category -> subcategory -> entry
    pub flavors: BTreeMap<String, BTreeMap<String, FlavorSubcategory>>,
    /// Canonical base method -> curated entry
    pub processing: BTreeMap<String, ProcessingEntry>,
    /// "a+b" pair key -> rule
    pub interactions: BTreeMap<String, InteractionRule>,
    pub geography: GeographyTable,
}

impl Default for ReferenceData {
    fn default() -> Self {
        defaults::reference_data()
    }
}

impl ReferenceData {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let data: ReferenceData =
            serde_json::from_str(s).context("Failed to parse reference data JSON")?;
        Ok(data)
    }

    /// Look up an interaction rule under either ordering of the pair key
    pub fn interaction_rule(&self, a: &str, b: &str) -> Option<&InteractionRule> {
        self.interactions
            .get(&format!("{}+{}", a, b))
            .or_else(|| self.interactions.get(&format!("{}+{}", b, a)))
    }

    /// Effect ids named anywhere in the tables that are not vocabulary
    /// members. Empty for a well-formed data set.
    pub fn unknown_effect_ids(&self) -> Vec<String> {
        let mut unknown = Vec::new();
        let mut note = |id: &str| {
            if !effects::is_known(id) && !unknown.iter().any(|u| u == id) {
                unknown.push(id.to_string());
            }
        };

        for scores in self.tea_types.values() {
            scores.keys().for_each(|id| note(id));
        }
        for subcategories in self.flavors.values() {
            for entry in subcategories.values() {
                entry.effects.iter().for_each(|id| note(id));
            }
        }
        for entry in self.processing.values() {
            entry.effects.keys().for_each(|id| note(id));
        }
        for rule in self.interactions.values() {
            rule.modifies.iter().for_each(|m| note(&m.target));
        }
        for table in [
            &self.geography.climate_zones,
            &self.geography.seasons,
            &self.geography.altitude_bands,
            &self.geography.humidity_bands,
        ] {
            for scores in table.values() {
                scores.keys().for_each(|id| note(id));
            }
        }

        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_use_known_effects_only() {
        let data = ReferenceData::default();
        assert_eq!(data.unknown_effect_ids(), Vec::<String>::new());
    }

    #[test]
    fn test_default_tables_are_populated() {
        let data = ReferenceData::default();
        assert!(data.tea_types.contains_key("green"));
        assert!(data.processing.contains_key("steamed"));
        assert!(!data.interactions.is_empty());
        assert!(!data.geography.climate_zones.is_empty());
    }

    #[test]
    fn test_interaction_rule_lookup_is_unordered() {
        let data = ReferenceData::default();
        let forward = data.interaction_rule("soothing", "clarifying");
        let backward = data.interaction_rule("clarifying", "soothing");
        assert!(forward.is_some());
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_json_roundtrip() {
        let data = ReferenceData::default();
        let json = serde_json::to_string(&data).unwrap();
        let parsed = ReferenceData::from_json_str(&json).unwrap();
        assert_eq!(data, parsed);
    }

    #[test]
    fn test_unknown_effect_ids_reported() {
        let mut data = ReferenceData::default();
        data.tea_types
            .get_mut("green")
            .unwrap()
            .insert("zesty".to_string(), 5.0);
        assert_eq!(data.unknown_effect_ids(), vec!["zesty".to_string()]);
    }
}
