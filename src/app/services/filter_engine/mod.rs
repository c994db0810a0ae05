//! Title filtering over the sighting store
//!
//! A filter keeps every sighting whose title contains the query,
//! ignoring case, in load order. Results are memoized per exact query string
//! in a bounded [`QueryCache`]; results are identical with the cache cold,
//! warm, or disabled.
//!
//! ```text
//!   query ──► QueryCache ──hit──► Arc<FilteredSet>
//!                 │
//!                miss
//!                 ▼
//!         filter_sightings(store, query)
//! ```

use crate::app::models::Sighting;
use crate::app::services::sighting_loader::SightingStore;
use std::sync::Arc;
use tracing::debug;

pub mod cache;

#[cfg(test)]
pub mod tests;

pub use cache::{CacheStats, QueryCache};

// =============================================================================
// Filtered Set
// =============================================================================

/// Load-ordered subset of the sighting store
///
/// Holds indices into the shared backing slice rather than copies of the
/// sightings. Equality compares the sightings themselves.
#[derive(Debug, Clone)]
pub struct FilteredSet {
    source: Arc<[Sighting]>,
    indices: Vec<usize>,
}

impl FilteredSet {
    /// Subset containing every sighting of the store
    pub fn all(store: &SightingStore) -> Self {
        Self {
            source: store.shared(),
            indices: (0..store.len()).collect(),
        }
    }

    /// Number of sightings in the subset
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the subset is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Positions of the subset within the store
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterate sightings in load order
    pub fn iter(&self) -> impl Iterator<Item = &Sighting> + '_ {
        self.indices.iter().map(|&i| &self.source[i])
    }
}

impl PartialEq for FilteredSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a> IntoIterator for &'a FilteredSet {
    type Item = &'a Sighting;
    type IntoIter = Box<dyn Iterator<Item = &'a Sighting> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Return the sightings whose title contains `query`, ignoring case
///
/// An empty query matches every sighting.
pub fn filter_sightings(store: &SightingStore, query: &str) -> FilteredSet {
    let needle = query.to_lowercase();
    let indices = store
        .sightings()
        .iter()
        .enumerate()
        .filter(|(_, sighting)| sighting.title_contains_lowercase(&needle))
        .map(|(i, _)| i)
        .collect();

    FilteredSet {
        source: store.shared(),
        indices,
    }
}

// =============================================================================
// Filter Engine
// =============================================================================

/// Memoizing front for [`filter_sightings`]
#[derive(Debug)]
pub struct FilterEngine {
    store: SightingStore,
    cache: QueryCache<FilteredSet>,
}

impl FilterEngine {
    /// Create an engine with an injected cache
    pub fn new(store: SightingStore, cache: QueryCache<FilteredSet>) -> Self {
        Self { store, cache }
    }

    /// Filter the store by title, consulting the cache first
    pub fn filter(&self, query: &str) -> Arc<FilteredSet> {
        self.cache.get_or_compute(query, || {
            let subset = filter_sightings(&self.store, query);
            debug!(
                "Filter cache miss for {:?}: {} of {} sightings match",
                query,
                subset.len(),
                self.store.len()
            );
            subset
        })
    }

    /// The underlying store
    pub fn store(&self) -> &SightingStore {
        &self.store
    }

    /// The query cache
    pub fn cache(&self) -> &QueryCache<FilteredSet> {
        &self.cache
    }
}
