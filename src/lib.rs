pub mod config;
pub mod data;
pub mod output;
pub mod sample;
pub mod scoring;

pub use sample::{Geography, TeaSample};
pub use scoring::engine::{Analysis, Calibration, Engine};
