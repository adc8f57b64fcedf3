//! Heuristic balancing battery applied after the pairwise interactions.
//!
//! Every adjustment lives in one declarative table of (condition, action)
//! entries so each rule can be inspected and tested on its own. No scoring
//! heuristics hide in inline branches elsewhere in the pipeline.

use super::processing::parse_method;
use super::scores::ScoreMap;
use crate::sample::TeaSample;

#[derive(Debug, Clone)]
pub struct BalancingRule {
    pub name: &'static str,
    pub condition: Condition,
    pub action: Action,
}

/// Guard deciding whether a rule fires
#[derive(Debug, Clone)]
pub enum Condition {
    Always,
    /// All listed flavor tags and all listed canonical base methods are
    /// present on the sample
    SampleHas {
        flavors: &'static [&'static str],
        methods: &'static [&'static str],
    },
    /// Strictly more than `more_than` effects score strictly above `above`
    StrongEffects { above: f64, more_than: usize },
}

/// Adjustment applied when the condition holds
#[derive(Debug, Clone)]
pub enum Action {
    /// Cap the target at `ratio` times the best-scoring other effect
    CapAtRatioOfTop {
        target: &'static str,
        ratio: f64,
    },
    Multiply {
        target: &'static str,
        factor: f64,
    },
    /// Scale down the `count` weakest present members of the allowlist
    DampWeakest {
        allowlist: &'static [&'static str],
        count: usize,
        factor: f64,
    },
}

pub const BALANCING_RULES: &[BalancingRule] = &[
    BalancingRule {
        name: "energizing anti-dominance cap",
        condition: Condition::Always,
        action: Action::CapAtRatioOfTop {
            target: "energizing",
            ratio: 1.3,
        },
    },
    BalancingRule {
        name: "shaded umami focus boost",
        condition: Condition::SampleHas {
            flavors: &["umami"],
            methods: &["shade-grown"],
        },
        action: Action::Multiply {
            target: "focusing",
            factor: 1.5,
        },
    },
    BalancingRule {
        name: "steamed marine soothing boost",
        condition: Condition::SampleHas {
            flavors: &["marine"],
            methods: &["steamed"],
        },
        action: Action::Multiply {
            target: "soothing",
            factor: 1.25,
        },
    },
    BalancingRule {
        name: "aged ferment centering boost",
        condition: Condition::SampleHas {
            flavors: &[],
            methods: &["aged", "fermented"],
        },
        action: Action::Multiply {
            target: "centering",
            factor: 1.4,
        },
    },
    BalancingRule {
        name: "crowded-profile dampener",
        condition: Condition::StrongEffects {
            above: 8.0,
            more_than: 2,
        },
        action: Action::DampWeakest {
            allowlist: &["uplifting", "refreshing", "renewing", "revitalizing"],
            count: 2,
            factor: 0.9,
        },
    },
];

/// Run the full battery in table order
pub fn apply_balancing(scores: &mut ScoreMap, sample: &TeaSample) {
    for rule in BALANCING_RULES {
        if condition_holds(&rule.condition, scores, sample) {
            apply_action(&rule.action, scores);
        }
    }
}

fn condition_holds(condition: &Condition, scores: &ScoreMap, sample: &TeaSample) -> bool {
    match condition {
        Condition::Always => true,
        Condition::SampleHas { flavors, methods } => {
            flavors.iter().all(|f| sample.has_flavor(f))
                && methods.iter().all(|m| sample_has_method(sample, m))
        }
        Condition::StrongEffects { above, more_than } => {
            let count = scores.iter().filter(|(_, score)| *score > *above).count();
            count > *more_than
        }
    }
}

fn sample_has_method(sample: &TeaSample, base: &str) -> bool {
    sample
        .processing_methods
        .iter()
        .any(|raw| parse_method(raw).base == base)
}

fn apply_action(action: &Action, scores: &mut ScoreMap) {
    match action {
        Action::CapAtRatioOfTop { target, ratio } => {
            if !scores.contains(target) {
                return;
            }
            let top_other = scores
                .iter()
                .filter(|(id, _)| *id != *target)
                .map(|(_, score)| score)
                .fold(0.0, f64::max);
            if top_other > 0.0 {
                let cap = top_other * ratio;
                if scores.get(target) > cap {
                    scores.set(target, cap);
                }
            }
        }
        Action::Multiply { target, factor } => {
            scores.scale(target, *factor);
        }
        Action::DampWeakest {
            allowlist,
            count,
            factor,
        } => {
            let mut present: Vec<(String, f64)> = scores
                .iter()
                .filter(|(id, _)| allowlist.contains(id))
                .map(|(id, score)| (id.to_string(), score))
                .collect();
            // Weakest first; ties broken by id ascending
            present.sort_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.0.cmp(&b.0))
            });
            for (id, _) in present.into_iter().take(*count) {
                scores.scale(&id, *factor);
            }
        }
    }
}
