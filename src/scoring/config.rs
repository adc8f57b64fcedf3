use serde::{Deserialize, Serialize};

use super::aggregate::Component;

/// Engine configuration: component weights, classification thresholds, and
/// normalization parameters.
///
/// Weights should sum to roughly 1.0. This is a caller responsibility and is
/// deliberately not enforced at runtime; validation only rejects negative
/// weights. All numeric fields are reachable through the dotted-path
/// [`get`](Config::get)/[`set`](Config::set) contract.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     tea_type: 0.25
///     compounds: 0.30
///     processing: 0.15
///     geography: 0.15
///     flavors: 0.15
///   thresholds:
///     supporting_effect: 3.5
///     dominant_effect: 6.5
///   interaction_strength_factor: 0.8
///   normalization:
///     strategy: max
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub weights: ComponentWeights,
    pub thresholds: Thresholds,

    /// Scales the strength of every pairwise interaction
    pub interaction_strength_factor: f64,

    pub normalization: NormalizationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: ComponentWeights::default(),
            thresholds: Thresholds::default(),
            interaction_strength_factor: 0.8,
            normalization: NormalizationConfig::default(),
        }
    }
}

impl Config {
    /// Dotted-path read of a numeric setting. Unknown paths return None;
    /// the caller supplies its own fallback.
    pub fn get(&self, path: &str) -> Option<f64> {
        match path {
            "weights.tea_type" => Some(self.weights.tea_type),
            "weights.compounds" => Some(self.weights.compounds),
            "weights.processing" => Some(self.weights.processing),
            "weights.geography" => Some(self.weights.geography),
            "weights.flavors" => Some(self.weights.flavors),
            "thresholds.supporting_effect" => Some(self.thresholds.supporting_effect),
            "thresholds.dominant_effect" => Some(self.thresholds.dominant_effect),
            "interaction_strength_factor" => Some(self.interaction_strength_factor),
            "normalization.midpoint" => Some(self.normalization.midpoint),
            "normalization.steepness" => Some(self.normalization.steepness),
            "normalization.stretch" => Some(self.normalization.stretch),
            "normalization.cap" => Some(self.normalization.cap),
            _ => None,
        }
    }

    /// Dotted-path write of a numeric setting. Returns false (and changes
    /// nothing) for an unknown path.
    pub fn set(&mut self, path: &str, value: f64) -> bool {
        let slot = match path {
            "weights.tea_type" => &mut self.weights.tea_type,
            "weights.compounds" => &mut self.weights.compounds,
            "weights.processing" => &mut self.weights.processing,
            "weights.geography" => &mut self.weights.geography,
            "weights.flavors" => &mut self.weights.flavors,
            "thresholds.supporting_effect" => &mut self.thresholds.supporting_effect,
            "thresholds.dominant_effect" => &mut self.thresholds.dominant_effect,
            "interaction_strength_factor" => &mut self.interaction_strength_factor,
            "normalization.midpoint" => &mut self.normalization.midpoint,
            "normalization.steepness" => &mut self.normalization.steepness,
            "normalization.stretch" => &mut self.normalization.stretch,
            "normalization.cap" => &mut self.normalization.cap,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Per-component weights used by the aggregation fold
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ComponentWeights {
    pub tea_type: f64,
    pub compounds: f64,
    pub processing: f64,
    pub geography: f64,
    pub flavors: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            tea_type: 0.25,
            compounds: 0.30,
            processing: 0.15,
            geography: 0.15,
            flavors: 0.15,
        }
    }
}

impl ComponentWeights {
    pub fn for_component(&self, component: Component) -> f64 {
        match component {
            Component::TeaType => self.tea_type,
            Component::Processing => self.processing,
            Component::Geography => self.geography,
            Component::Flavors => self.flavors,
            Component::Compounds => self.compounds,
        }
    }
}

/// Classification thresholds for the effect tiers
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Thresholds {
    /// Minimum score for ranks 2-3 to count as supporting effects
    pub supporting_effect: f64,
    /// Score above which the dominant effect is reported as strong
    pub dominant_effect: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            supporting_effect: 3.5,
            dominant_effect: 6.5,
        }
    }
}

/// Normalization strategy selector
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Rescale so the maximum score becomes the cap (the default contract)
    Max,
    /// Logistic curve with configurable midpoint/steepness
    Sigmoid,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct NormalizationConfig {
    pub strategy: Strategy,
    /// Sigmoid midpoint: the input score mapped to half the cap
    pub midpoint: f64,
    /// Sigmoid steepness; higher means a sharper S-curve
    pub steepness: f64,
    /// Mid-range stretch applied after the sigmoid, about half the cap
    pub stretch: f64,
    /// Upper bound of the normalized range
    pub cap: f64,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Max,
            midpoint: 5.0,
            steepness: 1.0,
            stretch: 1.0,
            cap: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = ComponentWeights::default();
        let sum = weights.tea_type
            + weights.compounds
            + weights.processing
            + weights.geography
            + weights.flavors;
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(weights.compounds, 0.30);
    }

    #[test]
    fn test_get_known_paths() {
        let config = Config::default();
        assert_eq!(config.get("weights.compounds"), Some(0.30));
        assert_eq!(config.get("thresholds.supporting_effect"), Some(3.5));
        assert_eq!(config.get("interaction_strength_factor"), Some(0.8));
        assert_eq!(config.get("normalization.cap"), Some(10.0));
    }

    #[test]
    fn test_get_unknown_path_is_none() {
        let config = Config::default();
        assert_eq!(config.get("weights.astrology"), None);
        assert_eq!(config.get(""), None);
    }

    #[test]
    fn test_set_roundtrip() {
        let mut config = Config::default();
        assert!(config.set("weights.flavors", 0.2));
        assert_eq!(config.get("weights.flavors"), Some(0.2));
        assert_eq!(config.weights.flavors, 0.2);
    }

    #[test]
    fn test_set_unknown_path_changes_nothing() {
        let mut config = Config::default();
        assert!(!config.set("thresholds.bogus", 1.0));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = Config::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
weights:
  compounds: 0.5
interaction_strength_factor: 0.6
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.weights.compounds, 0.5);
        assert_eq!(config.weights.tea_type, 0.25);
        assert_eq!(config.interaction_strength_factor, 0.6);
        assert_eq!(config.normalization.strategy, Strategy::Max);
    }

    #[test]
    fn test_sigmoid_strategy_parses() {
        let yaml = r#"
normalization:
  strategy: sigmoid
  midpoint: 4.0
  steepness: 1.2
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.normalization.strategy, Strategy::Sigmoid);
        assert_eq!(config.normalization.midpoint, 4.0);
        assert_eq!(config.normalization.cap, 10.0);
    }
}
