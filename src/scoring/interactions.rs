use serde::Serialize;

use super::scores::ScoreMap;
use crate::data::ReferenceData;

/// Fraction of the interaction strength used when a rule carries no
/// explicit modifiers and mutually reinforces its participants instead
const MUTUAL_REINFORCEMENT: f64 = 0.2;

/// Number of top-ranked effects considered for the reported
/// significant-interaction pairs
const SIGNIFICANT_TOP_N: usize = 3;

/// A reported pairwise interaction for downstream description text
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Interaction {
    pub name: String,
    pub effects: (String, String),
    pub strength: f64,
    pub description: String,
}

/// Apply every matching pairwise rule to the combined map.
///
/// Effects are ranked once (score desc, id asc) and every pair i<j in that
/// ranking is checked against the rule table under both key orderings.
/// Strength derives from the ranked snapshot, so earlier adjustments do not
/// feed later pair strengths within the same pass. New effect ids enter the
/// map only as rule targets.
pub fn apply_interactions(scores: &mut ScoreMap, data: &ReferenceData, strength_factor: f64) {
    let ranked = scores.ranked();

    for i in 0..ranked.len() {
        for j in (i + 1)..ranked.len() {
            let (effect_i, score_i) = &ranked[i];
            let (effect_j, score_j) = &ranked[j];
            let Some(rule) = data.interaction_rule(effect_i, effect_j) else {
                continue;
            };

            let strength = score_i.min(*score_j) * strength_factor;
            if rule.modifies.is_empty() {
                scores.add(effect_i, strength * MUTUAL_REINFORCEMENT);
                scores.add(effect_j, strength * MUTUAL_REINFORCEMENT);
            } else {
                for adjustment in &rule.modifies {
                    scores.add(&adjustment.target, strength * adjustment.modifier);
                }
            }
        }
    }
}

/// Rank the significant interactions among the strongest effects.
///
/// Effects at or above `threshold` qualify; the top three qualifying
/// effects are considered and every pair among them is checked against the
/// rule table. Reporting only; the score map is not touched.
pub fn significant_interactions(
    scores: &ScoreMap,
    data: &ReferenceData,
    threshold: f64,
    strength_factor: f64,
) -> Vec<Interaction> {
    let strong: Vec<(String, f64)> = scores
        .ranked()
        .into_iter()
        .filter(|(_, score)| *score >= threshold)
        .take(SIGNIFICANT_TOP_N)
        .collect();

    let mut found = Vec::new();
    for i in 0..strong.len() {
        for j in (i + 1)..strong.len() {
            let (effect_i, score_i) = &strong[i];
            let (effect_j, score_j) = &strong[j];
            if let Some(rule) = data.interaction_rule(effect_i, effect_j) {
                found.push(Interaction {
                    name: rule.name.clone(),
                    effects: (effect_i.clone(), effect_j.clone()),
                    strength: score_i.min(*score_j) * strength_factor,
                    description: rule.description.clone(),
                });
            }
        }
    }

    found.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    found
}
