pub mod aggregate;
pub mod balance;
pub mod compounds;
pub mod config;
pub mod engine;
pub mod flavors;
pub mod geography;
pub mod interactions;
pub mod normalize;
pub mod processing;
pub mod scores;
pub mod select;
pub mod tea_type;
pub mod validation;

pub use config::{ComponentWeights, Config, NormalizationConfig, Strategy, Thresholds};
pub use engine::{Analysis, Calibration, Engine};
pub use scores::ScoreMap;
pub use validation::validate_config;
