use serde::Serialize;

use super::config::ComponentWeights;
use super::flavors::FlavorBreakdown;
use super::scores::ScoreMap;

/// The five scoring components, in fold order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    TeaType,
    Processing,
    Geography,
    Flavors,
    Compounds,
}

/// Fixed fold order. The weighted sum is commutative, so this only shapes
/// the progression trace, but the trace is part of the output contract and
/// must follow this exact order.
pub const FOLD_ORDER: [Component; 5] = [
    Component::TeaType,
    Component::Processing,
    Component::Geography,
    Component::Flavors,
    Component::Compounds,
];

impl Component {
    pub fn key(&self) -> &'static str {
        match self {
            Component::TeaType => "tea_type",
            Component::Processing => "processing",
            Component::Geography => "geography",
            Component::Flavors => "flavors",
            Component::Compounds => "compounds",
        }
    }
}

/// The five raw component maps plus the flavor breakdown, as produced by
/// the calculators before any weighting
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ComponentScores {
    pub tea_type: ScoreMap,
    pub processing: ScoreMap,
    pub geography: ScoreMap,
    pub flavors: ScoreMap,
    pub compounds: ScoreMap,
    pub flavor_breakdown: FlavorBreakdown,
}

impl ComponentScores {
    pub fn raw(&self, component: Component) -> &ScoreMap {
        match component {
            Component::TeaType => &self.tea_type,
            Component::Processing => &self.processing,
            Component::Geography => &self.geography,
            Component::Flavors => &self.flavors,
            Component::Compounds => &self.compounds,
        }
    }
}

/// One snapshot of the running weighted sum, taken after a component fold
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Stage {
    pub component: Component,
    pub scores: ScoreMap,
}

/// Ordered explainability trace of the aggregation. Snapshots are exact
/// unclamped running sums; nothing downstream reads them for control flow.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Progression {
    pub stages: Vec<Stage>,
}

impl Progression {
    pub fn stage(&self, component: Component) -> Option<&ScoreMap> {
        self.stages
            .iter()
            .find(|s| s.component == component)
            .map(|s| &s.scores)
    }
}

/// Combine the raw component maps into one weighted map.
///
/// Folds in [`FOLD_ORDER`], snapshotting after each component. The returned
/// combined map is the final running sum clamped once to [0, 10]; the
/// snapshots themselves stay unclamped.
pub fn combine(
    components: &ComponentScores,
    weights: &ComponentWeights,
) -> (ScoreMap, Progression) {
    let mut running = ScoreMap::new();
    let mut progression = Progression::default();

    for component in FOLD_ORDER {
        running.merge_scaled(components.raw(component), weights.for_component(component));
        progression.stages.push(Stage {
            component,
            scores: running.clone(),
        });
    }

    let mut combined = running;
    combined.clamp_all(0.0, 10.0);
    (combined, progression)
}
