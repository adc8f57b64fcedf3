use std::collections::BTreeMap;

use super::scores::ScoreMap;
use crate::sample::TeaSample;

/// Type used when the sample's type is missing or absent from the table
pub const FALLBACK_TYPE: &str = "green";

/// Base effect scores for the sample's tea type.
///
/// Unknown or missing types fall back to [`FALLBACK_TYPE`]. A table without
/// the fallback type yields an empty map rather than an error.
pub fn base_scores(
    sample: &TeaSample,
    table: &BTreeMap<String, BTreeMap<String, f64>>,
) -> ScoreMap {
    let requested = sample
        .tea_type
        .as_deref()
        .map(|t| t.trim().to_ascii_lowercase())
        .unwrap_or_default();

    table
        .get(requested.as_str())
        .or_else(|| table.get(FALLBACK_TYPE))
        .map(ScoreMap::from)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReferenceData;

    fn table() -> BTreeMap<String, BTreeMap<String, f64>> {
        ReferenceData::default().tea_types
    }

    #[test]
    fn test_known_type_lookup() {
        let sample = TeaSample {
            tea_type: Some("black".to_string()),
            ..Default::default()
        };
        let scores = base_scores(&sample, &table());
        assert_eq!(scores.get("energizing"), 8.0);
        assert_eq!(scores.get("warming"), 7.0);
    }

    #[test]
    fn test_type_is_case_insensitive() {
        let sample = TeaSample {
            tea_type: Some("  Puerh ".to_string()),
            ..Default::default()
        };
        let scores = base_scores(&sample, &table());
        assert_eq!(scores.get("grounding"), 8.0);
    }

    #[test]
    fn test_unknown_type_falls_back_to_green() {
        let sample = TeaSample {
            tea_type: Some("chocolate".to_string()),
            ..Default::default()
        };
        let scores = base_scores(&sample, &table());
        assert_eq!(scores.get("clarifying"), 7.0);
        assert_eq!(scores.get("soothing"), 6.0);
    }

    #[test]
    fn test_missing_type_falls_back_to_green() {
        let scores = base_scores(&TeaSample::default(), &table());
        assert_eq!(scores.get("clarifying"), 7.0);
    }

    #[test]
    fn test_empty_table_yields_empty_map() {
        let scores = base_scores(&TeaSample::default(), &BTreeMap::new());
        assert!(scores.is_empty());
    }
}
