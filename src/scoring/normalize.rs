use super::config::{NormalizationConfig, Strategy};
use super::scores::ScoreMap;

/// Minimum gap between the top two scores before the dominant gets nudged
const DOMINANT_GAP: f64 = 0.3;
/// Nudge added to the top score when the gap is too small
const DOMINANT_NUDGE: f64 = 0.25;

/// Rescale every score into [0, cap] using the configured strategy.
///
/// The default max-normalization is order-independent and reproducible:
/// every score is scaled so the maximum becomes the cap. An all-zero or
/// empty map is returned unchanged.
pub fn normalize(scores: &mut ScoreMap, config: &NormalizationConfig) {
    match config.strategy {
        Strategy::Max => normalize_max(scores, config.cap),
        Strategy::Sigmoid => normalize_sigmoid(scores, config),
    }
}

fn normalize_max(scores: &mut ScoreMap, cap: f64) {
    let max = scores.max_score();
    if max <= 0.0 {
        return;
    }
    for value in scores.values_mut() {
        *value = *value / max * cap;
    }
}

/// Logistic rescaling: midpoint maps to half the cap, steepness sets the
/// slope, and the mid-range stretch spreads values away from the center
/// before the hard cap clamps the result.
fn normalize_sigmoid(scores: &mut ScoreMap, config: &NormalizationConfig) {
    let half = config.cap / 2.0;
    for value in scores.values_mut() {
        let squashed = config.cap / (1.0 + (-config.steepness * (*value - config.midpoint)).exp());
        let stretched = half + (squashed - half) * config.stretch;
        *value = stretched.clamp(0.0, config.cap);
    }
}

/// Guarantee a clear single dominant effect: when the top two scores sit
/// within [`DOMINANT_GAP`] of each other, the top one is raised by
/// [`DOMINANT_NUDGE`], capped at 10. Never lowers any score.
pub fn enhance_dominant(scores: &mut ScoreMap) {
    let ranked = scores.ranked();
    if ranked.len() < 2 {
        return;
    }
    let (top_id, top_score) = &ranked[0];
    let (_, second_score) = &ranked[1];
    if top_score - second_score < DOMINANT_GAP {
        scores.set(top_id, (top_score + DOMINANT_NUDGE).min(10.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f64)]) -> ScoreMap {
        let mut m = ScoreMap::new();
        for (id, v) in entries {
            m.set(id, *v);
        }
        m
    }

    #[test]
    fn test_max_normalization_scales_to_cap() {
        let mut scores = map(&[("soothing", 4.0), ("calming", 2.0), ("focusing", 1.0)]);
        normalize(&mut scores, &NormalizationConfig::default());
        assert_eq!(scores.get("soothing"), 10.0);
        assert_eq!(scores.get("calming"), 5.0);
        assert_eq!(scores.get("focusing"), 2.5);
    }

    #[test]
    fn test_zero_max_is_unchanged() {
        let mut scores = map(&[("soothing", 0.0), ("calming", 0.0)]);
        let before = scores.clone();
        normalize(&mut scores, &NormalizationConfig::default());
        assert_eq!(scores, before);
    }

    #[test]
    fn test_empty_map_is_unchanged() {
        let mut scores = ScoreMap::new();
        normalize(&mut scores, &NormalizationConfig::default());
        assert!(scores.is_empty());
    }

    #[test]
    fn test_all_scores_within_bounds_after_normalization() {
        let mut scores = map(&[("a", 37.0), ("b", 12.5), ("c", 0.4)]);
        normalize(&mut scores, &NormalizationConfig::default());
        for (_, score) in scores.iter() {
            assert!((0.0..=10.0).contains(&score));
        }
    }

    #[test]
    fn test_sigmoid_is_monotonic_and_capped() {
        let config = NormalizationConfig {
            strategy: Strategy::Sigmoid,
            ..Default::default()
        };
        let mut scores = map(&[("low", 1.0), ("mid", 5.0), ("high", 9.0), ("huge", 40.0)]);
        normalize(&mut scores, &config);
        assert!(scores.get("low") < scores.get("mid"));
        assert!(scores.get("mid") < scores.get("high"));
        assert!(scores.get("high") <= scores.get("huge"));
        assert!(scores.get("huge") <= 10.0);
        // Midpoint lands at half the cap
        assert!((scores.get("mid") - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_sigmoid_stretch_spreads_from_center() {
        let stretched = NormalizationConfig {
            strategy: Strategy::Sigmoid,
            stretch: 1.5,
            ..Default::default()
        };
        let plain = NormalizationConfig {
            strategy: Strategy::Sigmoid,
            ..Default::default()
        };
        let mut a = map(&[("high", 7.0)]);
        let mut b = map(&[("high", 7.0)]);
        normalize(&mut a, &stretched);
        normalize(&mut b, &plain);
        assert!(a.get("high") > b.get("high"));
    }

    #[test]
    fn test_enhance_nudges_narrow_gap() {
        let mut scores = map(&[("soothing", 9.0), ("clarifying", 8.9)]);
        enhance_dominant(&mut scores);
        assert!((scores.get("soothing") - 9.25).abs() < 1e-9);
        assert_eq!(scores.get("clarifying"), 8.9);
    }

    #[test]
    fn test_enhance_leaves_clear_gap_alone() {
        let mut scores = map(&[("soothing", 9.0), ("clarifying", 6.0)]);
        enhance_dominant(&mut scores);
        assert_eq!(scores.get("soothing"), 9.0);
    }

    #[test]
    fn test_enhance_caps_at_ten() {
        let mut scores = map(&[("soothing", 10.0), ("clarifying", 9.9)]);
        enhance_dominant(&mut scores);
        assert_eq!(scores.get("soothing"), 10.0);
    }

    #[test]
    fn test_enhance_never_decreases_top() {
        let mut scores = map(&[("soothing", 9.95), ("clarifying", 9.8)]);
        enhance_dominant(&mut scores);
        assert!(scores.get("soothing") >= 9.95);
        assert!(scores.get("soothing") <= 10.0);
    }

    #[test]
    fn test_enhance_breaks_exact_tie_deterministically() {
        // Tie at the top: id-ascending rank wins the nudge
        let mut scores = map(&[("soothing", 8.0), ("clarifying", 8.0)]);
        enhance_dominant(&mut scores);
        assert!((scores.get("clarifying") - 8.25).abs() < 1e-9);
        assert_eq!(scores.get("soothing"), 8.0);
    }

    #[test]
    fn test_enhance_single_effect_is_noop() {
        let mut scores = map(&[("soothing", 5.0)]);
        enhance_dominant(&mut scores);
        assert_eq!(scores.get("soothing"), 5.0);
    }
}
