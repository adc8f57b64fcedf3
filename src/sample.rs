use serde::{Deserialize, Serialize};

/// Neutral midpoint on the 0-10 compound scale, substituted for missing
/// caffeine/theanine levels. Deliberately not zero: a zero level would fire
/// the low-ratio branches for samples that simply omitted the field.
pub const NEUTRAL_LEVEL: f64 = 5.0;

/// A tea sample as submitted for analysis.
///
/// Every field is optional. Sparse samples are valid input: missing numeric
/// levels fall back to [`NEUTRAL_LEVEL`], missing sequences to empty, and a
/// missing type to the engine's fallback type.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TeaSample {
    pub name: Option<String>,

    /// Tea type token: "green", "white", "oolong", "black", "puerh", ...
    #[serde(rename = "type")]
    pub tea_type: Option<String>,

    /// Caffeine content on a 0-10 scale
    pub caffeine_level: Option<f64>,

    /// L-theanine content on a 0-10 scale
    pub l_theanine_level: Option<f64>,

    /// Flavor tags in tasting order. Order matters: earlier tags weigh more.
    pub flavor_profile: Vec<String>,

    /// Processing method tags, each optionally carrying an intensity
    /// qualifier (e.g. "heavy-roast", "charcoal roasted")
    pub processing_methods: Vec<String>,

    pub geography: Option<Geography>,
}

impl TeaSample {
    pub fn caffeine(&self) -> f64 {
        self.caffeine_level.unwrap_or(NEUTRAL_LEVEL)
    }

    pub fn theanine(&self) -> f64 {
        self.l_theanine_level.unwrap_or(NEUTRAL_LEVEL)
    }

    /// L-theanine to caffeine ratio. Zero caffeine carries no ratio signal,
    /// so the ratio branches are skipped rather than dividing by zero.
    pub fn ratio(&self) -> Option<f64> {
        let caffeine = self.caffeine();
        if caffeine > 0.0 {
            Some(self.theanine() / caffeine)
        } else {
            None
        }
    }

    /// Case-insensitive flavor tag membership
    pub fn has_flavor(&self, tag: &str) -> bool {
        self.flavor_profile
            .iter()
            .any(|f| f.eq_ignore_ascii_case(tag))
    }
}

/// Provenance of a sample. Absent subfields contribute nothing to the
/// geography component; there is no meaningful midpoint for a coordinate.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Geography {
    /// Meters above sea level
    pub altitude: Option<f64>,
    /// Relative humidity percentage
    pub humidity: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Calendar month of harvest, 1-12
    pub harvest_month: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_levels_default_to_midpoint() {
        let sample = TeaSample::default();
        assert_eq!(sample.caffeine(), 5.0);
        assert_eq!(sample.theanine(), 5.0);
        // Midpoint over midpoint is a neutral ratio
        assert_eq!(sample.ratio(), Some(1.0));
    }

    #[test]
    fn test_zero_caffeine_has_no_ratio() {
        let sample = TeaSample {
            caffeine_level: Some(0.0),
            l_theanine_level: Some(8.0),
            ..Default::default()
        };
        assert_eq!(sample.ratio(), None);
    }

    #[test]
    fn test_flavor_membership_case_insensitive() {
        let sample = TeaSample {
            flavor_profile: vec!["Umami".to_string(), "marine".to_string()],
            ..Default::default()
        };
        assert!(sample.has_flavor("umami"));
        assert!(sample.has_flavor("MARINE"));
        assert!(!sample.has_flavor("honey"));
    }

    #[test]
    fn test_sparse_json_deserializes() {
        let sample: TeaSample = serde_json::from_str(r#"{"type": "oolong"}"#).unwrap();
        assert_eq!(sample.tea_type.as_deref(), Some("oolong"));
        assert!(sample.flavor_profile.is_empty());
        assert!(sample.geography.is_none());
    }

    #[test]
    fn test_full_json_deserializes() {
        let json = r#"{
            "name": "Gyokuro",
            "type": "green",
            "caffeine_level": 4.5,
            "l_theanine_level": 9,
            "flavor_profile": ["umami", "marine"],
            "processing_methods": ["shade-grown", "steamed"],
            "geography": {"latitude": 34.9, "altitude": 250, "harvest_month": 4}
        }"#;
        let sample: TeaSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.ratio(), Some(2.0));
        assert_eq!(sample.geography.unwrap().harvest_month, Some(4));
    }
}
