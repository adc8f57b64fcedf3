use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A per-effect score map.
///
/// Backed by a BTreeMap so iteration order is deterministic; ranking uses an
/// explicit sort (score descending, effect id ascending) rather than any
/// reliance on insertion or hash order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ScoreMap(BTreeMap<String, f64>);

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for an effect, zero when absent
    pub fn get(&self, id: &str) -> f64 {
        self.0.get(id).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn set(&mut self, id: &str, value: f64) {
        self.0.insert(id.to_string(), value);
    }

    pub fn add(&mut self, id: &str, delta: f64) {
        *self.0.entry(id.to_string()).or_insert(0.0) += delta;
    }

    pub fn scale(&mut self, id: &str, factor: f64) {
        if let Some(v) = self.0.get_mut(id) {
            *v *= factor;
        }
    }

    /// Fold another map in, scaled by `weight`
    pub fn merge_scaled(&mut self, other: &ScoreMap, weight: f64) {
        for (id, value) in &other.0 {
            *self.0.entry(id.clone()).or_insert(0.0) += weight * value;
        }
    }

    pub fn clamp_all(&mut self, min: f64, max: f64) {
        for v in self.0.values_mut() {
            *v = v.clamp(min, max);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn max_score(&self) -> f64 {
        self.0.values().copied().fold(0.0, f64::max)
    }

    /// Effects ranked by score descending, ties broken by id ascending.
    /// This is the single ordering used everywhere downstream.
    pub fn ranked(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> =
            self.0.iter().map(|(k, v)| (k.clone(), *v)).collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        entries
    }

    pub fn top(&self) -> Option<(String, f64)> {
        self.ranked().into_iter().next()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.0.values_mut()
    }
}

impl FromIterator<(String, f64)> for ScoreMap {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&BTreeMap<String, f64>> for ScoreMap {
    fn from(map: &BTreeMap<String, f64>) -> Self {
        Self(map.clone())
    }
}
