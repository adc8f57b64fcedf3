//! Built-in reference tables.
//!
//! A compact but representative data set covering the common tea types,
//! flavor families, and processing methods. Curated deployments replace it
//! wholesale via `ReferenceData::from_json_str`.

use std::collections::BTreeMap;

use super::{
    FlavorSubcategory, GeographyTable, InteractionModifier, InteractionRule, ProcessingEntry,
    ReferenceData,
};

fn scores(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn tea_types() -> BTreeMap<String, BTreeMap<String, f64>> {
    let mut table = BTreeMap::new();
    table.insert(
        "green".to_string(),
        scores(&[
            ("clarifying", 7.0),
            ("soothing", 6.0),
            ("refreshing", 6.0),
            ("energizing", 4.0),
        ]),
    );
    table.insert(
        "white".to_string(),
        scores(&[
            ("peaceful", 8.0),
            ("soothing", 7.0),
            ("cooling", 6.0),
            ("contemplative", 5.0),
        ]),
    );
    table.insert(
        "yellow".to_string(),
        scores(&[
            ("soothing", 7.0),
            ("refreshing", 6.0),
            ("peaceful", 5.0),
            ("clarifying", 5.0),
        ]),
    );
    table.insert(
        "oolong".to_string(),
        scores(&[
            ("harmonizing", 8.0),
            ("elevating", 6.0),
            ("uplifting", 6.0),
            ("focusing", 5.0),
        ]),
    );
    table.insert(
        "black".to_string(),
        scores(&[
            ("energizing", 8.0),
            ("warming", 7.0),
            ("grounding", 5.0),
            ("nurturing", 4.0),
        ]),
    );
    table.insert(
        "puerh".to_string(),
        scores(&[
            ("grounding", 8.0),
            ("centering", 7.0),
            ("stabilizing", 6.0),
            ("warming", 5.0),
        ]),
    );
    table.insert(
        "dark".to_string(),
        scores(&[
            ("grounding", 7.0),
            ("warming", 6.0),
            ("comforting", 6.0),
            ("centering", 5.0),
        ]),
    );
    table
}

fn flavor_entry(flavors: &[&str], effects: &[&str], intensity: f64) -> FlavorSubcategory {
    FlavorSubcategory {
        flavors: strings(flavors),
        effects: strings(effects),
        intensity,
    }
}

fn flavors() -> BTreeMap<String, BTreeMap<String, FlavorSubcategory>> {
    let mut table: BTreeMap<String, BTreeMap<String, FlavorSubcategory>> = BTreeMap::new();

    let mut floral = BTreeMap::new();
    floral.insert(
        "white_floral".to_string(),
        flavor_entry(
            &["jasmine", "lilac", "gardenia"],
            &["peaceful", "soothing"],
            2.5,
        ),
    );
    floral.insert(
        "exotic_floral".to_string(),
        flavor_entry(
            &["orchid", "rose", "honeysuckle"],
            &["uplifting", "elevating"],
            2.0,
        ),
    );
    table.insert("floral".to_string(), floral);

    let mut vegetal = BTreeMap::new();
    vegetal.insert(
        "leafy".to_string(),
        flavor_entry(
            &["grassy", "spinach", "nettle"],
            &["refreshing", "clarifying"],
            2.0,
        ),
    );
    vegetal.insert(
        "oceanic".to_string(),
        flavor_entry(
            &["umami", "marine", "seaweed"],
            &["soothing", "clarifying", "focusing"],
            3.0,
        ),
    );
    table.insert("vegetal".to_string(), vegetal);

    let mut fruity = BTreeMap::new();
    fruity.insert(
        "stone_fruit".to_string(),
        flavor_entry(
            &["apricot", "peach", "plum"],
            &["uplifting", "refreshing"],
            2.0,
        ),
    );
    fruity.insert(
        "citrus".to_string(),
        flavor_entry(
            &["lemon", "bergamot", "yuzu"],
            &["awakening", "refreshing"],
            2.5,
        ),
    );
    fruity.insert(
        "dried_fruit".to_string(),
        flavor_entry(&["raisin", "fig", "date"], &["comforting", "nurturing"], 2.0),
    );
    table.insert("fruity".to_string(), fruity);

    let mut roasted = BTreeMap::new();
    roasted.insert(
        "nutty".to_string(),
        flavor_entry(
            &["almond", "chestnut", "walnut"],
            &["comforting", "grounding"],
            2.0,
        ),
    );
    roasted.insert(
        "toasty".to_string(),
        flavor_entry(
            &["toast", "caramel", "biscuit"],
            &["warming", "comforting"],
            2.5,
        ),
    );
    table.insert("roasted".to_string(), roasted);

    let mut earthy = BTreeMap::new();
    earthy.insert(
        "mineral".to_string(),
        flavor_entry(
            &["wet-stone", "flint", "slate"],
            &["centering", "stabilizing"],
            2.0,
        ),
    );
    earthy.insert(
        "forest".to_string(),
        flavor_entry(
            &["moss", "mushroom", "leather"],
            &["grounding", "centering"],
            2.5,
        ),
    );
    table.insert("earthy".to_string(), earthy);

    let mut spicy = BTreeMap::new();
    spicy.insert(
        "warm_spice".to_string(),
        flavor_entry(
            &["cinnamon", "clove", "pepper"],
            &["warming", "energizing"],
            2.0,
        ),
    );
    table.insert("spicy".to_string(), spicy);

    let mut sweet = BTreeMap::new();
    sweet.insert(
        "honeyed".to_string(),
        flavor_entry(
            &["honey", "malt", "molasses"],
            &["nurturing", "comforting"],
            2.0,
        ),
    );
    table.insert("sweet".to_string(), sweet);

    table
}

fn processing_entry(
    effects: &[(&str, f64)],
    intensity: f64,
    category: &str,
    description: &str,
) -> ProcessingEntry {
    ProcessingEntry {
        effects: scores(effects),
        intensity,
        category: category.to_string(),
        description: description.to_string(),
    }
}

fn processing() -> BTreeMap<String, ProcessingEntry> {
    let mut table = BTreeMap::new();
    table.insert(
        "steamed".to_string(),
        processing_entry(
            &[("soothing", 2.5), ("clarifying", 2.0), ("refreshing", 1.0)],
            1.0,
            "heat",
            "Brief steaming that fixes the leaf green",
        ),
    );
    table.insert(
        "pan-fired".to_string(),
        processing_entry(
            &[("awakening", 2.0), ("focusing", 1.5)],
            1.0,
            "heat",
            "Wok firing that halts oxidation with toasty heat",
        ),
    );
    table.insert(
        "roasted".to_string(),
        processing_entry(
            &[("nurturing", 2.5), ("comforting", 2.0), ("warming", 1.5)],
            1.0,
            "heat",
            "Slow roasting that deepens and sweetens the leaf",
        ),
    );
    table.insert(
        "baked".to_string(),
        processing_entry(
            &[("comforting", 2.0), ("warming", 1.5)],
            1.0,
            "heat",
            "Gentle baking between rolling passes",
        ),
    );
    table.insert(
        "oxidized".to_string(),
        processing_entry(
            &[("energizing", 2.0), ("warming", 1.5)],
            1.0,
            "oxidation",
            "Enzymatic browning that builds body and brisk energy",
        ),
    );
    table.insert(
        "withered".to_string(),
        processing_entry(
            &[("peaceful", 2.0), ("soothing", 1.5)],
            1.0,
            "moisture",
            "Long withering that softens the leaf chemistry",
        ),
    );
    table.insert(
        "fermented".to_string(),
        processing_entry(
            &[("grounding", 2.5), ("centering", 2.0), ("stabilizing", 1.5)],
            1.0,
            "post-processing",
            "Microbial fermentation yielding deep, earthy character",
        ),
    );
    table.insert(
        "aged".to_string(),
        processing_entry(
            &[
                ("centering", 2.5),
                ("contemplative", 2.0),
                ("stabilizing", 1.5),
            ],
            1.0,
            "post-processing",
            "Years of slow maturation in storage",
        ),
    );
    table.insert(
        "shade-grown".to_string(),
        processing_entry(
            &[("soothing", 3.0), ("clarifying", 2.5), ("focusing", 2.0)],
            1.0,
            "cultivation",
            "Weeks under shade before plucking, concentrating theanine",
        ),
    );
    table.insert(
        "sun-dried".to_string(),
        processing_entry(
            &[("uplifting", 2.0), ("refreshing", 1.5)],
            1.0,
            "moisture",
            "Open-air drying under direct sun",
        ),
    );
    table.insert(
        "smoked".to_string(),
        processing_entry(
            &[("grounding", 2.0), ("warming", 2.0), ("comforting", 1.0)],
            1.0,
            "heat",
            "Drying over smoldering wood",
        ),
    );
    table.insert(
        "rolled".to_string(),
        processing_entry(
            &[("harmonizing", 1.5)],
            1.0,
            "shaping",
            "Rolling that bruises the leaf and rounds the cup",
        ),
    );
    table
}

fn rule(name: &str, description: &str, modifies: &[(&str, f64)]) -> InteractionRule {
    InteractionRule {
        name: name.to_string(),
        description: description.to_string(),
        modifies: modifies
            .iter()
            .map(|(target, modifier)| InteractionModifier {
                target: target.to_string(),
                modifier: *modifier,
            })
            .collect(),
    }
}

fn interactions() -> BTreeMap<String, InteractionRule> {
    let mut table = BTreeMap::new();
    table.insert(
        "calming+focusing".to_string(),
        rule(
            "Mindful Clarity",
            "Calm attention that stays sharp rather than drifting",
            &[("clarifying", 0.8), ("centering", 0.5)],
        ),
    );
    table.insert(
        "energizing+focusing".to_string(),
        rule(
            "Directed Drive",
            "Stimulated energy channeled into one task",
            &[("awakening", 0.7), ("clarifying", 0.4)],
        ),
    );
    table.insert(
        "calming+energizing".to_string(),
        rule(
            "Smooth Lift",
            "Alertness without edge; the classic theanine-caffeine pairing",
            &[("harmonizing", 0.9), ("balanced", 0.6)],
        ),
    );
    table.insert(
        "soothing+clarifying".to_string(),
        rule(
            "Quiet Insight",
            "A settled body that frees the mind to see clearly",
            &[("peaceful", 0.6), ("focusing", 0.5)],
        ),
    );
    table.insert(
        "grounding+warming".to_string(),
        rule(
            "Hearth Comfort",
            "Rooted warmth that feels like home",
            &[("comforting", 0.8), ("nurturing", 0.5)],
        ),
    );
    table.insert(
        "peaceful+soothing".to_string(),
        rule(
            "Deep Stillness",
            "Stillness and ease reinforcing one another",
            &[],
        ),
    );
    table.insert(
        "uplifting+refreshing".to_string(),
        rule(
            "Bright Morning",
            "A clean, optimistic reset",
            &[("renewing", 0.7)],
        ),
    );
    table.insert(
        "grounding+centering".to_string(),
        rule(
            "Rooted Presence",
            "Stability in body and attention together",
            &[],
        ),
    );
    table.insert(
        "nurturing+comforting".to_string(),
        rule(
            "Gentle Warmth",
            "Care and familiarity compounding into ease",
            &[("soothing", 0.5)],
        ),
    );
    table.insert(
        "energizing+warming".to_string(),
        rule(
            "Kindled Vigor",
            "Physical warmth feeding sustained energy",
            &[("revitalizing", 0.7)],
        ),
    );
    table.insert(
        "clarifying+elevating".to_string(),
        rule(
            "High Clarity",
            "Lucidity with a sense of altitude",
            &[("focusing", 0.6)],
        ),
    );
    table.insert(
        "centering+contemplative".to_string(),
        rule(
            "Still Mind",
            "Gathered attention turning quietly inward",
            &[("reflective", 0.5)],
        ),
    );
    table
}

fn geography() -> GeographyTable {
    let mut climate_zones = BTreeMap::new();
    climate_zones.insert(
        "tropical".to_string(),
        scores(&[("energizing", 1.5), ("uplifting", 1.0)]),
    );
    climate_zones.insert(
        "subtropical".to_string(),
        scores(&[("harmonizing", 1.5), ("refreshing", 1.0)]),
    );
    climate_zones.insert(
        "temperate".to_string(),
        scores(&[("soothing", 1.5), ("stabilizing", 1.0)]),
    );
    climate_zones.insert(
        "subpolar".to_string(),
        scores(&[("grounding", 1.5), ("contemplative", 1.0)]),
    );

    let mut seasons = BTreeMap::new();
    seasons.insert(
        "spring".to_string(),
        scores(&[("renewing", 1.5), ("refreshing", 1.5)]),
    );
    seasons.insert(
        "summer".to_string(),
        scores(&[("energizing", 1.0), ("uplifting", 1.0)]),
    );
    seasons.insert(
        "autumn".to_string(),
        scores(&[("grounding", 1.0), ("comforting", 1.0)]),
    );
    seasons.insert(
        "winter".to_string(),
        scores(&[("contemplative", 1.0), ("centering", 1.0)]),
    );

    let mut altitude_bands = BTreeMap::new();
    altitude_bands.insert("low".to_string(), scores(&[("grounding", 1.0)]));
    altitude_bands.insert("mid".to_string(), scores(&[("harmonizing", 1.0)]));
    altitude_bands.insert(
        "high".to_string(),
        scores(&[("clarifying", 1.5), ("elevating", 1.5)]),
    );

    let mut humidity_bands = BTreeMap::new();
    humidity_bands.insert("dry".to_string(), scores(&[("clarifying", 0.5)]));
    humidity_bands.insert("humid".to_string(), scores(&[("soothing", 1.0)]));

    GeographyTable {
        climate_zones,
        seasons,
        altitude_bands,
        humidity_bands,
    }
}

pub fn reference_data() -> ReferenceData {
    ReferenceData {
        tea_types: tea_types(),
        flavors: flavors(),
        processing: processing(),
        interactions: interactions(),
        geography: geography(),
    }
}
