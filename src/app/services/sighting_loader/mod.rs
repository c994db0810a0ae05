//! Sighting store and CSV loading
//!
//! This module loads BFRO sighting reports from CSV once at startup and keeps
//! them in an immutable, shareable store. Rows that cannot be parsed are
//! dropped with a warning, and rows outside the retained year range are
//! dropped silently; neither aborts loading.

use crate::app::models::Sighting;
use std::collections::HashSet;
use std::sync::Arc;

pub mod loader;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::LoadOptions;
pub use parser::ColumnMapping;
pub use stats::LoadStats;

/// Immutable, load-ordered collection of validated sightings
///
/// The backing slice is reference counted so filtered subsets can point into
/// it without copying records.
#[derive(Debug, Clone)]
pub struct SightingStore {
    /// Sightings in source order, restricted to retained rows
    pub(crate) sightings: Arc<[Sighting]>,

    /// Where the sightings were loaded from
    pub(crate) source: String,
}

impl SightingStore {
    /// Create a store from already validated sightings
    pub fn new(source: impl Into<String>, sightings: Vec<Sighting>) -> Self {
        Self {
            sightings: sightings.into(),
            source: source.into(),
        }
    }

    /// Create an in-memory store
    pub fn from_sightings(sightings: Vec<Sighting>) -> Self {
        Self::new("<memory>", sightings)
    }

    /// All sightings in load order
    pub fn sightings(&self) -> &[Sighting] {
        &self.sightings
    }

    /// Shared handle to the backing slice
    pub fn shared(&self) -> Arc<[Sighting]> {
        Arc::clone(&self.sightings)
    }

    /// Source description (file path or `<memory>`)
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of sightings
    pub fn len(&self) -> usize {
        self.sightings.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.sightings.is_empty()
    }

    /// Distinct classifications in first-seen order
    pub fn classifications(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.sightings
            .iter()
            .map(|s| s.classification.as_str())
            .filter(|class| seen.insert(*class))
            .collect()
    }

    /// Earliest and latest sighting year, if any sightings exist
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let mut years = self.sightings.iter().map(Sighting::year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}
