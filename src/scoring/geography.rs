use super::scores::ScoreMap;
use crate::data::GeographyTable;
use crate::sample::TeaSample;

/// Climate zone from absolute latitude
pub fn climate_zone(latitude: f64) -> &'static str {
    let lat = latitude.abs();
    if lat < 23.5 {
        "tropical"
    } else if lat < 35.0 {
        "subtropical"
    } else if lat < 55.0 {
        "temperate"
    } else {
        "subpolar"
    }
}

/// Season of a harvest month, flipped for the southern hemisphere
pub fn season(month: u32, southern: bool) -> Option<&'static str> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let normalized = if southern { (month + 5) % 12 + 1 } else { month };
    Some(match normalized {
        3..=5 => "spring",
        6..=8 => "summer",
        9..=11 => "autumn",
        _ => "winter",
    })
}

/// Altitude band in meters
pub fn altitude_band(meters: f64) -> &'static str {
    if meters > 1500.0 {
        "high"
    } else if meters >= 500.0 {
        "mid"
    } else {
        "low"
    }
}

/// Humidity band from relative humidity percent. Mid-range humidity is
/// neutral and maps to no band.
pub fn humidity_band(percent: f64) -> Option<&'static str> {
    if percent >= 75.0 {
        Some("humid")
    } else if percent < 45.0 {
        Some("dry")
    } else {
        None
    }
}

/// Raw geography contribution: one fixed delta set per matched band.
/// Absent subfields simply match no band.
pub fn geography_scores(sample: &TeaSample, table: &GeographyTable) -> ScoreMap {
    let mut scores = ScoreMap::new();
    let Some(geo) = &sample.geography else {
        return scores;
    };

    if let Some(lat) = geo.latitude {
        add_band(&mut scores, &table.climate_zones, climate_zone(lat));
    }

    if let Some(month) = geo.harvest_month {
        let southern = geo.latitude.map(|lat| lat < 0.0).unwrap_or(false);
        if let Some(name) = season(month, southern) {
            add_band(&mut scores, &table.seasons, name);
        }
    }

    if let Some(altitude) = geo.altitude {
        add_band(&mut scores, &table.altitude_bands, altitude_band(altitude));
    }

    if let Some(humidity) = geo.humidity {
        if let Some(name) = humidity_band(humidity) {
            add_band(&mut scores, &table.humidity_bands, name);
        }
    }

    scores
}

fn add_band(
    scores: &mut ScoreMap,
    bands: &std::collections::BTreeMap<String, std::collections::BTreeMap<String, f64>>,
    name: &str,
) {
    if let Some(deltas) = bands.get(name) {
        for (effect, delta) in deltas {
            scores.add(effect, *delta);
        }
    }
}
