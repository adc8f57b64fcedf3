//! The closed effect vocabulary.
//!
//! Every score map in the pipeline is keyed by one of these ids. Reference
//! tables and interaction rules may only name members of this set; the
//! validator rejects anything else at load time.

pub struct EffectInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Degenerate fallback effect for malformed input
pub const BALANCED: &str = "balanced";

pub const EFFECTS: &[EffectInfo] = &[
    EffectInfo {
        id: "balanced",
        name: "Balanced",
        description: "An even, unremarkable profile with no single pull",
    },
    EffectInfo {
        id: "calming",
        name: "Calming",
        description: "Settles the nervous system without dulling it",
    },
    EffectInfo {
        id: "energizing",
        name: "Energizing",
        description: "A clear lift in alertness and drive",
    },
    EffectInfo {
        id: "focusing",
        name: "Focusing",
        description: "Narrows attention onto the task at hand",
    },
    EffectInfo {
        id: "soothing",
        name: "Soothing",
        description: "Eases tension; gentle on body and mind",
    },
    EffectInfo {
        id: "clarifying",
        name: "Clarifying",
        description: "Clears mental fog; crisp, lucid thinking",
    },
    EffectInfo {
        id: "peaceful",
        name: "Peaceful",
        description: "Quiet stillness, low arousal contentment",
    },
    EffectInfo {
        id: "grounding",
        name: "Grounding",
        description: "A rooted, bodily sense of stability",
    },
    EffectInfo {
        id: "uplifting",
        name: "Uplifting",
        description: "Brightens mood and outlook",
    },
    EffectInfo {
        id: "nurturing",
        name: "Nurturing",
        description: "A cared-for, restorative warmth",
    },
    EffectInfo {
        id: "comforting",
        name: "Comforting",
        description: "Familiar, reassuring ease",
    },
    EffectInfo {
        id: "harmonizing",
        name: "Harmonizing",
        description: "Balances competing pulls into one even state",
    },
    EffectInfo {
        id: "restorative",
        name: "Restorative",
        description: "Replenishes after depletion",
    },
    EffectInfo {
        id: "awakening",
        name: "Awakening",
        description: "A brisk start; shakes off sleep inertia",
    },
    EffectInfo {
        id: "centering",
        name: "Centering",
        description: "Draws scattered attention back to a still point",
    },
    EffectInfo {
        id: "stabilizing",
        name: "Stabilizing",
        description: "Evens out swings in mood and energy",
    },
    EffectInfo {
        id: "warming",
        name: "Warming",
        description: "Radiating physical warmth",
    },
    EffectInfo {
        id: "cooling",
        name: "Cooling",
        description: "A light, cooling freshness",
    },
    EffectInfo {
        id: "refreshing",
        name: "Refreshing",
        description: "Rinses away staleness; a clean reset",
    },
    EffectInfo {
        id: "elevating",
        name: "Elevating",
        description: "A subtle lift above the everyday",
    },
    EffectInfo {
        id: "renewing",
        name: "Renewing",
        description: "A fresh-start feeling, spring-like",
    },
    EffectInfo {
        id: "revitalizing",
        name: "Revitalizing",
        description: "Recharges flagging energy",
    },
    EffectInfo {
        id: "contemplative",
        name: "Contemplative",
        description: "Invites slow, deliberate reflection",
    },
    EffectInfo {
        id: "reflective",
        name: "Reflective",
        description: "Turns attention gently inward",
    },
];

/// Effects reinforced by a high theanine-to-caffeine ratio
pub const CALMING_FAMILY: &[&str] = &["calming", "peaceful", "soothing", "restorative"];

/// Effects reinforced by a low theanine-to-caffeine ratio
pub const STIMULATING_FAMILY: &[&str] = &["energizing", "awakening", "revitalizing"];

pub fn lookup(id: &str) -> Option<&'static EffectInfo> {
    EFFECTS.iter().find(|e| e.id == id)
}

pub fn is_known(id: &str) -> bool {
    lookup(id).is_some()
}
