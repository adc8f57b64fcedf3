use super::config::{Config, Strategy};

/// Validate engine configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (path, value) in [
        ("scoring.weights.tea_type", config.weights.tea_type),
        ("scoring.weights.compounds", config.weights.compounds),
        ("scoring.weights.processing", config.weights.processing),
        ("scoring.weights.geography", config.weights.geography),
        ("scoring.weights.flavors", config.weights.flavors),
    ] {
        if value < 0.0 {
            errors.push(format!("{}: must be non-negative", path));
        }
    }

    for (path, value) in [
        (
            "scoring.thresholds.supporting_effect",
            config.thresholds.supporting_effect,
        ),
        (
            "scoring.thresholds.dominant_effect",
            config.thresholds.dominant_effect,
        ),
    ] {
        if !(0.0..=10.0).contains(&value) {
            errors.push(format!("{}: must be within 0..=10", path));
        }
    }

    if config.interaction_strength_factor < 0.0 {
        errors.push("scoring.interaction_strength_factor: must be non-negative".to_string());
    }

    if config.normalization.cap <= 0.0 {
        errors.push("scoring.normalization.cap: must be positive".to_string());
    }

    if config.normalization.strategy == Strategy::Sigmoid {
        if config.normalization.steepness <= 0.0 {
            errors.push("scoring.normalization.steepness: must be positive".to_string());
        }
        if config.normalization.stretch <= 0.0 {
            errors.push("scoring.normalization.stretch: must be positive".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
