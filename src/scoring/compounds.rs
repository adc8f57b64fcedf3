use super::scores::ScoreMap;
use crate::data::effects::{CALMING_FAMILY, STIMULATING_FAMILY};
use crate::sample::TeaSample;

/// L-theanine to caffeine ratio bands.
///
/// Band boundaries are part of the scoring contract: balanced is the closed
/// interval [1.2, 1.8], extreme is strictly above 3.0, low strictly below
/// 0.8, very-low strictly below 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioBand {
    VeryLow,
    Low,
    Moderate,
    Balanced,
    Extreme,
}

impl RatioBand {
    pub fn classify(ratio: f64) -> Self {
        if ratio > 3.0 {
            RatioBand::Extreme
        } else if (1.2..=1.8).contains(&ratio) {
            RatioBand::Balanced
        } else if ratio < 0.5 {
            RatioBand::VeryLow
        } else if ratio < 0.8 {
            RatioBand::Low
        } else {
            RatioBand::Moderate
        }
    }

    fn deltas(&self) -> &'static [(&'static str, f64)] {
        match self {
            RatioBand::Extreme => &[("calming", 6.0), ("peaceful", 5.0), ("soothing", 4.0)],
            RatioBand::Balanced => &[("harmonizing", 6.0), ("peaceful", 4.0), ("focusing", 4.0)],
            RatioBand::Low => &[("energizing", 5.0), ("awakening", 4.0)],
            RatioBand::VeryLow => &[
                ("energizing", 7.0),
                ("awakening", 5.0),
                ("revitalizing", 4.0),
            ],
            RatioBand::Moderate => &[("harmonizing", 2.0)],
        }
    }
}

/// Boost added to every member of a compound family when its ratio
/// threshold fires
const FAMILY_BOOST: f64 = 2.0;

const CAFFEINE_LEVEL_WEIGHT: f64 = 0.9;
const THEANINE_LEVEL_WEIGHT: f64 = 0.8;

/// Raw compound contribution from caffeine and L-theanine levels.
///
/// The ratio branches fire only when a ratio signal exists (non-zero
/// caffeine). Boundary exactness matters: ratio 1.0 fires neither family
/// boost, and 1.5 does not fire the calming boost.
pub fn compound_scores(sample: &TeaSample) -> ScoreMap {
    let mut scores = ScoreMap::new();

    // Direct level contributions apply with or without a ratio signal
    scores.add("energizing", sample.caffeine() * CAFFEINE_LEVEL_WEIGHT);
    scores.add("calming", sample.theanine() * THEANINE_LEVEL_WEIGHT);

    if let Some(ratio) = sample.ratio() {
        for (effect, delta) in RatioBand::classify(ratio).deltas() {
            scores.add(effect, *delta);
        }

        if ratio > 1.5 {
            for effect in CALMING_FAMILY {
                scores.add(effect, FAMILY_BOOST);
            }
        }
        if ratio < 1.0 {
            for effect in STIMULATING_FAMILY {
                scores.add(effect, FAMILY_BOOST);
            }
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(caffeine: f64, theanine: f64) -> TeaSample {
        TeaSample {
            caffeine_level: Some(caffeine),
            l_theanine_level: Some(theanine),
            ..Default::default()
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RatioBand::classify(0.49), RatioBand::VeryLow);
        assert_eq!(RatioBand::classify(0.5), RatioBand::Low);
        assert_eq!(RatioBand::classify(0.79), RatioBand::Low);
        assert_eq!(RatioBand::classify(0.8), RatioBand::Moderate);
        assert_eq!(RatioBand::classify(1.19), RatioBand::Moderate);
        assert_eq!(RatioBand::classify(1.2), RatioBand::Balanced);
        assert_eq!(RatioBand::classify(1.8), RatioBand::Balanced);
        assert_eq!(RatioBand::classify(1.81), RatioBand::Moderate);
        assert_eq!(RatioBand::classify(3.0), RatioBand::Moderate);
        assert_eq!(RatioBand::classify(3.01), RatioBand::Extreme);
    }

    #[test]
    fn test_high_ratio_fires_calming_boost() {
        // Gyokuro-like: 9 / 4.5 = 2.0
        let scores = compound_scores(&sample(4.5, 9.0));
        // peaceful gets the family boost only (moderate band has none)
        assert_eq!(scores.get("peaceful"), 2.0);
        assert_eq!(scores.get("soothing"), 2.0);
        assert_eq!(scores.get("restorative"), 2.0);
        // calming = 9 * 0.8 direct + 2.0 boost
        assert!((scores.get("calming") - 9.2).abs() < 1e-9);
        // stimulating family untouched beyond the direct caffeine term
        assert!((scores.get("energizing") - 4.5 * 0.9).abs() < 1e-9);
        assert_eq!(scores.get("awakening"), 0.0);
    }

    #[test]
    fn test_low_ratio_fires_stimulating_boost() {
        // 2 / 8 = 0.25: very-low band plus the stimulating family boost
        let scores = compound_scores(&sample(8.0, 2.0));
        assert!((scores.get("energizing") - (8.0 * 0.9 + 7.0 + 2.0)).abs() < 1e-9);
        assert_eq!(scores.get("awakening"), 5.0 + 2.0);
        assert_eq!(scores.get("revitalizing"), 4.0 + 2.0);
        assert_eq!(scores.get("peaceful"), 0.0);
    }

    #[test]
    fn test_ratio_exactly_one_fires_neither_boost() {
        let scores = compound_scores(&sample(6.0, 6.0));
        // Only the direct terms and the moderate band delta
        assert!((scores.get("energizing") - 6.0 * 0.9).abs() < 1e-9);
        assert!((scores.get("calming") - 6.0 * 0.8).abs() < 1e-9);
        assert_eq!(scores.get("harmonizing"), 2.0);
        assert_eq!(scores.get("peaceful"), 0.0);
        assert_eq!(scores.get("awakening"), 0.0);
    }

    #[test]
    fn test_ratio_exactly_one_point_five_fires_no_calming_boost() {
        // 6 / 4 = 1.5 exactly: balanced band, boost threshold not crossed
        let scores = compound_scores(&sample(4.0, 6.0));
        assert_eq!(scores.get("harmonizing"), 6.0);
        assert_eq!(scores.get("peaceful"), 4.0);
        assert_eq!(scores.get("soothing"), 0.0);
        assert_eq!(scores.get("restorative"), 0.0);
    }

    #[test]
    fn test_zero_caffeine_skips_ratio_branches() {
        let scores = compound_scores(&sample(0.0, 9.0));
        // No band deltas, no boosts; direct terms only
        assert_eq!(scores.get("energizing"), 0.0);
        assert!((scores.get("calming") - 9.0 * 0.8).abs() < 1e-9);
        assert_eq!(scores.get("harmonizing"), 0.0);
        assert_eq!(scores.get("peaceful"), 0.0);
    }

    #[test]
    fn test_extreme_band() {
        // 9 / 2 = 4.5
        let scores = compound_scores(&sample(2.0, 9.0));
        assert!((scores.get("calming") - (9.0 * 0.8 + 6.0 + 2.0)).abs() < 1e-9);
        assert_eq!(scores.get("peaceful"), 5.0 + 2.0);
        assert_eq!(scores.get("soothing"), 4.0 + 2.0);
    }

    #[test]
    fn test_missing_levels_are_neutral() {
        // Midpoint defaults give ratio 1.0: no branch fires
        let scores = compound_scores(&TeaSample::default());
        assert!((scores.get("energizing") - 4.5).abs() < 1e-9);
        assert!((scores.get("calming") - 4.0).abs() < 1e-9);
        assert_eq!(scores.get("harmonizing"), 2.0);
    }
}
