//! Query façade over the sighting store
//!
//! [`QueryEngine`] is the single entry point for callers: given a filter
//! string it returns all four aggregate views, computed from one filtered
//! subset. The engine owns its query cache, so independent engines never
//! share memoized results.

use crate::app::services::aggregators::{
    ClassHistogram, GeoByClass, WeekdayHistogram, YearSeriesByClass, class_histogram,
    geo_by_class, weekday_histogram, year_series_by_class,
};
use crate::app::services::filter_engine::{CacheStats, FilterEngine, FilteredSet, QueryCache};
use crate::app::services::sighting_loader::{LoadOptions, LoadStats, SightingStore};
use crate::config::EngineConfig;
use crate::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// The four aggregate views for one filter string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateBundle {
    /// Class → map markers
    pub geo: GeoByClass,

    /// Class → sparse `(year, count)` series
    pub year_series: YearSeriesByClass,

    /// Dense `Sun..Sat` counts
    pub weekday_hist: WeekdayHistogram,

    /// Class → count, first-seen order
    pub class_hist: ClassHistogram,
}

impl AggregateBundle {
    /// Aggregate one subset into all four views
    pub fn from_subset(subset: &FilteredSet) -> Self {
        Self {
            geo: geo_by_class(subset),
            year_series: year_series_by_class(subset),
            weekday_hist: weekday_histogram(subset),
            class_hist: class_histogram(subset),
        }
    }

    /// Number of sightings the bundle was built from
    pub fn sighting_count(&self) -> usize {
        self.class_hist.total()
    }

    /// Whether the filter matched nothing
    pub fn is_empty(&self) -> bool {
        self.sighting_count() == 0
    }
}

/// Filter-and-aggregate engine
///
/// Safe to share across threads; queries never fail.
#[derive(Debug)]
pub struct QueryEngine {
    filter: FilterEngine,
    map_token: Option<String>,
}

impl QueryEngine {
    /// Create an engine over a loaded store with an injected cache
    pub fn new(store: SightingStore, cache: QueryCache<FilteredSet>) -> Self {
        Self {
            filter: FilterEngine::new(store, cache),
            map_token: None,
        }
    }

    /// Create an engine sized from configuration
    pub fn from_config(store: SightingStore, config: &EngineConfig) -> Self {
        let cache = QueryCache::new(config.cache_capacity, config.cache_ttl());
        Self::new(store, cache).with_map_token(config.map_token.clone())
    }

    /// Load the configured source and build an engine over it
    ///
    /// Fails only when the source itself cannot be loaded.
    pub fn load(config: &EngineConfig, show_progress: bool) -> Result<(Self, LoadStats)> {
        config.validate()?;
        let options = LoadOptions::from(config).with_progress(show_progress);
        let (store, stats) = SightingStore::load_from_path(&config.data_path, &options)?;

        info!(
            "Query engine ready: {} sightings, cache capacity {}",
            store.len(),
            config.cache_capacity
        );
        Ok((Self::from_config(store, config), stats))
    }

    /// Attach the opaque map token forwarded to rendering
    pub fn with_map_token(mut self, map_token: Option<String>) -> Self {
        self.map_token = map_token;
        self
    }

    /// Filtered subset for a query, memoized
    pub fn filter(&self, filter_text: &str) -> Arc<FilteredSet> {
        self.filter.filter(filter_text)
    }

    /// All four aggregate views for a filter string
    pub fn query_views(&self, filter_text: &str) -> AggregateBundle {
        let subset = self.filter(filter_text);
        let bundle = AggregateBundle::from_subset(&subset);
        debug!(
            "Query {:?}: {} sightings across {} classes",
            filter_text,
            subset.len(),
            bundle.class_hist.len()
        );
        bundle
    }

    /// Map display token, untouched
    pub fn map_token(&self) -> Option<&str> {
        self.map_token.as_deref()
    }

    /// The loaded sightings
    pub fn store(&self) -> &SightingStore {
        self.filter.store()
    }

    /// Query cache counters
    pub fn cache_stats(&self) -> CacheStats {
        self.filter.cache().stats()
    }
}
