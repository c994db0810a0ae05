//! Aggregate views over filtered sightings
//!
//! Four independent, pure aggregations. Each accepts any iterator of
//! sightings (a [`FilteredSet`](super::filter_engine::FilteredSet), a slice,
//! a store) and is built in a single pass.
//!
//! - [`geo`] - per-class `(latitude, longitude, title)` points
//! - [`yearly`] - per-class sparse `(year, count)` series, ascending by year
//! - [`weekday`] - dense seven-bucket day-of-week histogram
//! - [`classification`] - per-class counts
//!
//! Class-keyed outputs are [`ClassMap`]s, which keep classes in the order
//! they were first seen.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

pub mod classification;
pub mod geo;
pub mod weekday;
pub mod yearly;

#[cfg(test)]
pub mod tests;

pub use classification::{ClassHistogram, class_histogram};
pub use geo::{GeoByClass, GeoPoint, geo_by_class};
pub use weekday::{WeekdayHistogram, weekday_histogram};
pub use yearly::{YearCount, YearSeriesByClass, year_series_by_class};

// =============================================================================
// ClassMap
// =============================================================================

/// Mapping from classification label to a value, in first-seen order
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> ClassMap<V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Value for a class, if the class is present
    pub fn get(&self, class: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(key, _)| key == class)
            .map(|(_, value)| value)
    }

    /// Whether a class is present
    pub fn contains(&self, class: &str) -> bool {
        self.get(class).is_some()
    }

    /// Class labels in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Values in first-seen order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    /// `(class, value)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no class is present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Transform every value, keeping order
    pub fn map_values<U>(self, mut f: impl FnMut(V) -> U) -> ClassMap<U> {
        ClassMap {
            entries: self
                .entries
                .into_iter()
                .map(|(key, value)| (key, f(value)))
                .collect(),
        }
    }

    /// Consume into `(class, value)` pairs
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V> Default for ClassMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for ClassMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Single-pass group-by builder keyed by classification
///
/// Keeps a side index so each lookup is O(1) while entries stay in
/// first-seen order.
pub(crate) struct ClassGrouper<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> ClassGrouper<V> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Mutable slot for a class, created with `V::default()` on first sight
    pub(crate) fn slot(&mut self, class: &str) -> &mut V {
        let position = match self.index.get(class) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(class.to_string(), position);
                self.entries.push((class.to_string(), V::default()));
                position
            }
        };
        &mut self.entries[position].1
    }

    pub(crate) fn finish(self) -> ClassMap<V> {
        ClassMap {
            entries: self.entries,
        }
    }
}
