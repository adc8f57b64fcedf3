use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scoring::Config;

/// Top-level config file schema.
///
/// Example YAML:
/// ```yaml
/// data: /etc/steeped/reference.json
/// scoring:
///   weights:
///     compounds: 0.35
/// ```
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FileConfig {
    /// Optional path to a reference data JSON replacing the built-in tables
    pub data: Option<PathBuf>,

    /// Engine configuration; missing sections fall back to defaults
    pub scoring: Option<Config>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_config() {
        let config: FileConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.data.is_none());
        assert!(config.scoring.is_none());
    }

    #[test]
    fn test_partial_scoring_section() {
        let yaml = r#"
scoring:
  interaction_strength_factor: 0.5
"#;
        let config: FileConfig = serde_saphyr::from_str(yaml).unwrap();
        let scoring = config.scoring.unwrap();
        assert_eq!(scoring.interaction_strength_factor, 0.5);
        assert_eq!(scoring.weights.compounds, 0.30);
    }

    #[test]
    fn test_data_path_parses() {
        let config: FileConfig = serde_saphyr::from_str("data: ./tables.json").unwrap();
        assert_eq!(config.data.unwrap(), PathBuf::from("./tables.json"));
    }
}
