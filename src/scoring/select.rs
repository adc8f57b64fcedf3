use serde::Serialize;

use super::config::Thresholds;
use super::scores::ScoreMap;
use crate::data::effects;

/// Minimum score for ranks 4+ to count as additional effects
pub const ADDITIONAL_EFFECT_THRESHOLD: f64 = 4.0;

/// An effect with its resolved display metadata and final score
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EffectDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: f64,
}

/// Tiered classification of the final score map
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Selection {
    pub dominant: Option<EffectDetail>,
    pub supporting: Vec<EffectDetail>,
    pub additional: Vec<EffectDetail>,
}

/// Pure rank/threshold classification over the final map.
///
/// Dominant is rank 1 (tie-break: score desc, id asc). Supporting is ranks
/// 2-3 at or above the supporting threshold. Additional is ranks 4+ at or
/// above [`ADDITIONAL_EFFECT_THRESHOLD`].
pub fn select_effects(scores: &ScoreMap, thresholds: &Thresholds) -> Selection {
    let ranked = scores.ranked();
    let mut selection = Selection::default();

    for (rank, (id, score)) in ranked.into_iter().enumerate() {
        match rank {
            0 => selection.dominant = Some(detail(&id, score)),
            1 | 2 => {
                if score >= thresholds.supporting_effect {
                    selection.supporting.push(detail(&id, score));
                }
            }
            _ => {
                if score >= ADDITIONAL_EFFECT_THRESHOLD {
                    selection.additional.push(detail(&id, score));
                }
            }
        }
    }

    selection
}

/// Resolve display metadata from the vocabulary; ids outside it (rule
/// targets from caller-supplied tables) fall back to the id itself.
pub fn detail(id: &str, level: f64) -> EffectDetail {
    match effects::lookup(id) {
        Some(info) => EffectDetail {
            id: info.id.to_string(),
            name: info.name.to_string(),
            description: info.description.to_string(),
            level,
        },
        None => EffectDetail {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            level,
        },
    }
}
