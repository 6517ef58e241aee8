//! Snapshot value type for the full depth chart.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Owned copy of every position's roster, keyed by position name.
///
/// Serializes as a plain JSON object of `position -> [player, ...]`, the shape
/// carried under `playerChart` on the wire. Positions are ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepthChart(pub BTreeMap<String, Vec<String>>);

impl DepthChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Players at `position` in rank order, if the position has a roster.
    pub fn roster(&self, position: &str) -> Option<&[String]> {
        self.0.get(position).map(Vec::as_slice)
    }

    pub fn positions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, Vec<String>)> for DepthChart {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
