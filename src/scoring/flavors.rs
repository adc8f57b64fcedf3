use std::collections::BTreeMap;

use serde::Serialize;

use super::scores::ScoreMap;
use crate::data::FlavorSubcategory;
use crate::sample::TeaSample;

/// Derived flavor summary for description text downstream.
/// Never feeds back into scoring.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FlavorBreakdown {
    /// Recognized tags ranked by contributed weight (desc, then tag asc)
    pub dominant: Vec<String>,
    /// Recognized tag count per top-level category
    pub category_counts: BTreeMap<String, usize>,
}

/// Position weight for the tag at `index` in the flavor profile. The
/// profile is ordered; earlier tags weigh more, floored at half weight.
pub fn position_weight(index: usize) -> f64 {
    (1.0 - 0.1 * index as f64).max(0.5)
}

/// Raw flavor contribution plus the descriptive breakdown.
///
/// Each tag resolves to its subcategory entry; the entry's intensity, scaled
/// by position weight, accumulates into every effect the entry lists.
/// Unknown tags are ignored silently.
pub fn flavor_scores(
    sample: &TeaSample,
    table: &BTreeMap<String, BTreeMap<String, FlavorSubcategory>>,
) -> (ScoreMap, FlavorBreakdown) {
    let mut scores = ScoreMap::new();
    let mut breakdown = FlavorBreakdown::default();
    let mut weighted: Vec<(String, f64)> = Vec::new();

    for (index, tag) in sample.flavor_profile.iter().enumerate() {
        let Some((category, entry)) = find_subcategory(tag, table) else {
            continue;
        };

        let weight = entry.intensity * position_weight(index);
        for effect in &entry.effects {
            scores.add(effect, weight);
        }

        weighted.push((tag.to_ascii_lowercase(), weight));
        *breakdown.category_counts.entry(category).or_insert(0) += 1;
    }

    weighted.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    breakdown.dominant = weighted.into_iter().map(|(tag, _)| tag).collect();

    (scores, breakdown)
}

fn find_subcategory(
    tag: &str,
    table: &BTreeMap<String, BTreeMap<String, FlavorSubcategory>>,
) -> Option<(String, FlavorSubcategory)> {
    for (category, subcategories) in table {
        for entry in subcategories.values() {
            if entry.flavors.iter().any(|f| f.eq_ignore_ascii_case(tag)) {
                return Some((category.clone(), entry.clone()));
            }
        }
    }
    None
}
