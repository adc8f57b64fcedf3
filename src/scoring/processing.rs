use std::collections::BTreeMap;

use super::scores::ScoreMap;
use crate::data::ProcessingEntry;
use crate::sample::TeaSample;

/// Intensity qualifiers and their multipliers, in "qualifier-method" or
/// "qualifier method" position (e.g. "heavy-roast", "charcoal roasted")
pub const QUALIFIERS: &[(&str, f64)] = &[
    ("light", 0.7),
    ("short", 0.8),
    ("medium", 1.0),
    ("post", 1.1),
    ("vintage", 1.2),
    ("heavy", 1.4),
    ("deep", 1.5),
    ("full", 1.6),
    ("charcoal", 1.8),
];

/// Base-method aliases mapped to their canonical table keys
const BASE_ALIASES: &[(&str, &str)] = &[
    ("roast", "roasted"),
    ("steam", "steamed"),
    ("bake", "baked"),
    ("oxidize", "oxidized"),
    ("oxidised", "oxidized"),
    ("ferment", "fermented"),
    ("wither", "withered"),
    ("smoke", "smoked"),
    ("age", "aged"),
    ("roll", "rolled"),
    ("panfired", "pan-fired"),
    ("pan-fire", "pan-fired"),
    ("shade", "shade-grown"),
    ("shadegrown", "shade-grown"),
    ("sundried", "sun-dried"),
];

/// Fallback rules for methods without a curated table entry: each listed
/// effect receives this weight before the qualifier multiplier.
const DEFAULT_RULE_WEIGHT: f64 = 2.0;

const DEFAULT_RULES: &[(&str, &[&str])] = &[
    ("steamed", &["soothing", "clarifying"]),
    ("pan-fired", &["awakening", "focusing"]),
    ("roasted", &["nurturing", "comforting"]),
    ("baked", &["comforting", "warming"]),
    ("oxidized", &["energizing", "warming"]),
    ("withered", &["peaceful", "soothing"]),
    ("fermented", &["grounding", "centering"]),
    ("aged", &["centering", "stabilizing"]),
    ("shade-grown", &["soothing", "clarifying", "focusing"]),
    ("sun-dried", &["uplifting", "refreshing"]),
    ("smoked", &["grounding", "warming"]),
    ("rolled", &["harmonizing"]),
    ("processed", &["harmonizing", "grounding"]),
];

/// A method tag split into its canonical base and optional qualifier
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMethod {
    pub base: String,
    pub qualifier: Option<String>,
    pub multiplier: f64,
}

/// Parse a raw method tag. Accepted shapes: "method", "qualifier-method",
/// "qualifier method", and the generic "qualifier processed".
pub fn parse_method(raw: &str) -> ParsedMethod {
    let lowered = raw.trim().to_ascii_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() > 1 {
        if let Some((qualifier, multiplier)) =
            QUALIFIERS.iter().find(|(q, _)| *q == tokens[0]).copied()
        {
            return ParsedMethod {
                base: canonical_base(&tokens[1..].join("-")),
                qualifier: Some(qualifier.to_string()),
                multiplier,
            };
        }
    }

    ParsedMethod {
        base: canonical_base(&tokens.join("-")),
        qualifier: None,
        multiplier: 1.0,
    }
}

pub fn canonical_base(token: &str) -> String {
    BASE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| token.to_string())
}

/// Raw processing contribution.
///
/// Each method resolves to the curated table entry for its base when one
/// exists, otherwise to the fallback rule list; either contribution is
/// scaled by the qualifier multiplier. Unrecognized bases contribute
/// nothing.
pub fn processing_scores(
    sample: &TeaSample,
    table: &BTreeMap<String, ProcessingEntry>,
) -> ScoreMap {
    let mut scores = ScoreMap::new();

    for raw in &sample.processing_methods {
        let parsed = parse_method(raw);

        if let Some(entry) = table.get(&parsed.base) {
            for (effect, weight) in &entry.effects {
                scores.add(effect, weight * entry.intensity * parsed.multiplier);
            }
        } else if let Some((_, effects)) =
            DEFAULT_RULES.iter().find(|(base, _)| *base == parsed.base)
        {
            for effect in *effects {
                scores.add(effect, DEFAULT_RULE_WEIGHT * parsed.multiplier);
            }
        }
    }

    scores
}
