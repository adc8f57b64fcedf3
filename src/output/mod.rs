pub mod formatter;

pub use formatter::{
    format_analysis, format_effect_catalog, format_level, should_use_colors,
};
