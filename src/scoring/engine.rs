use serde::Serialize;

use super::aggregate::{self, ComponentScores, Progression};
use super::balance;
use super::compounds;
use super::config::Config;
use super::flavors;
use super::geography;
use super::interactions::{self, Interaction};
use super::normalize;
use super::processing;
use super::scores::ScoreMap;
use super::select::{self, EffectDetail};
use super::tea_type;
use crate::data::{effects, ReferenceData};
use crate::sample::TeaSample;

/// Base score injected for the expected dominant effect in calibration mode
const CALIBRATION_DOMINANT_LEVEL: f64 = 9.5;
/// Base score injected for the expected supporting effect in calibration mode
const CALIBRATION_SUPPORTING_LEVEL: f64 = 7.5;
/// Margin by which calibration re-boosts the expected dominant over the
/// current top after interactions
const CALIBRATION_REBOOST_MARGIN: f64 = 0.5;

/// The full analysis result handed to reporting collaborators
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Analysis {
    pub dominant: EffectDetail,
    pub supporting: Vec<EffectDetail>,
    pub additional: Vec<EffectDetail>,
    pub interactions: Vec<Interaction>,
    pub component_scores: ComponentScores,
    pub progression: Progression,
    pub final_scores: ScoreMap,
}

/// Expected effects injected by tuning scripts.
///
/// This reproduces the original calibration scaffold: the expectation is
/// written into the base scores and re-boosted after interactions. It makes
/// the prediction circular by construction and exists only for tuning
/// comparisons; the production [`Engine::calculate`] path never consults it.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub expected_dominant: String,
    pub expected_supporting: Option<String>,
}

/// An immutable analysis engine built from config and reference tables.
///
/// The whole pipeline is a single stateless transformation per
/// [`calculate`](Engine::calculate) call; concurrent calls over independent
/// samples are safe because nothing here is mutated after construction.
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
    data: ReferenceData,
}

impl Engine {
    pub fn new(config: Config, data: ReferenceData) -> Self {
        Self { config, data }
    }

    pub fn with_defaults() -> Self {
        Self::new(Config::default(), ReferenceData::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Run the full pipeline for one sample
    pub fn calculate(&self, sample: &TeaSample) -> Analysis {
        self.run(sample, None)
    }

    /// Analyze a raw JSON value. A non-object or undeserializable value
    /// yields the canonical degenerate result instead of an error.
    pub fn calculate_value(&self, value: &serde_json::Value) -> Analysis {
        if !value.is_object() {
            return degenerate_analysis();
        }
        match serde_json::from_value::<TeaSample>(value.clone()) {
            Ok(sample) => self.calculate(&sample),
            Err(_) => degenerate_analysis(),
        }
    }

    /// Tuning-only entry point; see [`Calibration`]
    pub fn calculate_calibrated(&self, sample: &TeaSample, calibration: &Calibration) -> Analysis {
        self.run(sample, Some(calibration))
    }

    fn run(&self, sample: &TeaSample, calibration: Option<&Calibration>) -> Analysis {
        let (flavor_scores, flavor_breakdown) = flavors::flavor_scores(sample, &self.data.flavors);
        let mut components = ComponentScores {
            tea_type: tea_type::base_scores(sample, &self.data.tea_types),
            processing: processing::processing_scores(sample, &self.data.processing),
            geography: geography::geography_scores(sample, &self.data.geography),
            flavors: flavor_scores,
            compounds: compounds::compound_scores(sample),
            flavor_breakdown,
        };

        if let Some(calibration) = calibration {
            components
                .tea_type
                .set(&calibration.expected_dominant, CALIBRATION_DOMINANT_LEVEL);
            if let Some(supporting) = &calibration.expected_supporting {
                components.tea_type.set(supporting, CALIBRATION_SUPPORTING_LEVEL);
            }
        }

        let (mut combined, progression) = aggregate::combine(&components, &self.config.weights);

        interactions::apply_interactions(
            &mut combined,
            &self.data,
            self.config.interaction_strength_factor,
        );
        balance::apply_balancing(&mut combined, sample);

        if let Some(calibration) = calibration {
            reboost_expected(&mut combined, &calibration.expected_dominant);
        }

        normalize::normalize(&mut combined, &self.config.normalization);
        normalize::enhance_dominant(&mut combined);

        let interactions = interactions::significant_interactions(
            &combined,
            &self.data,
            self.config.thresholds.supporting_effect,
            self.config.interaction_strength_factor,
        );

        let selection = select::select_effects(&combined, &self.config.thresholds);
        let dominant = selection
            .dominant
            .unwrap_or_else(|| select::detail(effects::BALANCED, 0.0));

        Analysis {
            dominant,
            supporting: selection.supporting,
            additional: selection.additional,
            interactions,
            component_scores: components,
            progression,
            final_scores: combined,
        }
    }
}

fn reboost_expected(scores: &mut ScoreMap, expected: &str) {
    if let Some((top_id, top_score)) = scores.top() {
        if top_id != expected {
            scores.set(expected, top_score + CALIBRATION_REBOOST_MARGIN);
        }
    }
}

/// Canonical result for malformed input: a bare "balanced" dominant with
/// nothing else populated
pub fn degenerate_analysis() -> Analysis {
    Analysis {
        dominant: select::detail(effects::BALANCED, 0.0),
        supporting: Vec::new(),
        additional: Vec::new(),
        interactions: Vec::new(),
        component_scores: ComponentScores::default(),
        progression: Progression::default(),
        final_scores: ScoreMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gyokuro() -> TeaSample {
        TeaSample {
            name: Some("Gyokuro".to_string()),
            tea_type: Some("green".to_string()),
            caffeine_level: Some(4.5),
            l_theanine_level: Some(9.0),
            flavor_profile: vec!["umami".to_string(), "marine".to_string()],
            processing_methods: vec!["shade-grown".to_string(), "steamed".to_string()],
            geography: None,
        }
    }

    #[test]
    fn test_shaded_green_profile() {
        let engine = Engine::with_defaults();
        let analysis = engine.calculate(&gyokuro());

        // Shade-grown plus umami/marine must push soothing and clarifying
        // to the top of the profile
        assert!(analysis.final_scores.get("soothing") >= 8.0);
        assert!(analysis.final_scores.get("clarifying") >= 7.0);
        assert!(
            analysis.dominant.id == "soothing" || analysis.dominant.id == "clarifying",
            "unexpected dominant: {}",
            analysis.dominant.id
        );

        // Ratio 9 / 4.5 = 2.0 crosses the calming boost threshold: the
        // compound component must carry a peaceful contribution
        assert!(analysis.component_scores.compounds.get("peaceful") > 0.0);

        // Flavor breakdown recognized both tags
        assert_eq!(
            analysis.component_scores.flavor_breakdown.dominant,
            vec!["umami".to_string(), "marine".to_string()]
        );
    }

    #[test]
    fn test_final_scores_bounded() {
        let engine = Engine::with_defaults();
        for sample in [
            gyokuro(),
            TeaSample::default(),
            TeaSample {
                tea_type: Some("black".to_string()),
                caffeine_level: Some(9.0),
                l_theanine_level: Some(1.0),
                flavor_profile: vec!["malt".to_string(), "caramel".to_string()],
                processing_methods: vec!["oxidized".to_string(), "heavy-roast".to_string()],
                ..Default::default()
            },
        ] {
            let analysis = engine.calculate(&sample);
            for (id, score) in analysis.final_scores.iter() {
                assert!(
                    (0.0..=10.0).contains(&score),
                    "{} out of range: {}",
                    id,
                    score
                );
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let engine = Engine::with_defaults();
        let first = engine.calculate(&gyokuro());
        let second = engine.calculate(&gyokuro());
        assert_eq!(first, second);
    }

    #[test]
    fn test_progression_last_stage_matches_weighted_sums() {
        let engine = Engine::with_defaults();
        let analysis = engine.calculate(&gyokuro());
        let last = analysis
            .progression
            .stage(aggregate::Component::Compounds)
            .unwrap();

        for id in last.ids() {
            let mut expected = 0.0;
            for component in aggregate::FOLD_ORDER {
                expected += engine.config().weights.for_component(component)
                    * analysis.component_scores.raw(component).get(id);
            }
            assert_eq!(last.get(id), expected, "mismatch for {}", id);
        }
    }

    #[test]
    fn test_sparse_sample_never_panics() {
        let engine = Engine::with_defaults();
        let analysis = engine.calculate(&TeaSample::default());
        assert!(!analysis.dominant.id.is_empty());
        assert!(!analysis.final_scores.is_empty());
    }

    #[test]
    fn test_non_object_value_is_degenerate() {
        let engine = Engine::with_defaults();
        for value in [json!(null), json!(42), json!("green"), json!([1, 2])] {
            let analysis = engine.calculate_value(&value);
            assert_eq!(analysis.dominant.id, "balanced");
            assert!(analysis.supporting.is_empty());
            assert!(analysis.additional.is_empty());
            assert!(analysis.final_scores.is_empty());
        }
    }

    #[test]
    fn test_wrongly_typed_field_is_degenerate() {
        let engine = Engine::with_defaults();
        let analysis = engine.calculate_value(&json!({"caffeine_level": "lots"}));
        assert_eq!(analysis.dominant.id, "balanced");
    }

    #[test]
    fn test_object_value_matches_typed_path() {
        let engine = Engine::with_defaults();
        let value = serde_json::to_value(gyokuro()).unwrap();
        assert_eq!(engine.calculate_value(&value), engine.calculate(&gyokuro()));
    }

    #[test]
    fn test_calibration_forces_expected_dominant() {
        let engine = Engine::with_defaults();
        let calibration = Calibration {
            expected_dominant: "grounding".to_string(),
            expected_supporting: Some("centering".to_string()),
        };
        // A sample whose organic profile points elsewhere entirely
        let analysis = engine.calculate_calibrated(&gyokuro(), &calibration);
        assert_eq!(analysis.dominant.id, "grounding");
    }

    #[test]
    fn test_production_path_ignores_calibration_levels() {
        let engine = Engine::with_defaults();
        let analysis = engine.calculate(&gyokuro());
        assert_ne!(analysis.dominant.id, "grounding");
        assert_eq!(analysis.component_scores.tea_type.get("grounding"), 0.0);
    }

    #[test]
    fn test_interactions_reported_for_strong_pairs() {
        let engine = Engine::with_defaults();
        let analysis = engine.calculate(&gyokuro());
        // soothing and clarifying both finish strong and share a rule
        assert!(analysis
            .interactions
            .iter()
            .any(|i| i.name == "Quiet Insight"));
    }

    #[test]
    fn test_analysis_serializes() {
        let engine = Engine::with_defaults();
        let analysis = engine.calculate(&gyokuro());
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("dominant").is_some());
        assert!(json.get("final_scores").is_some());
        assert!(json.get("progression").is_some());
    }
}
