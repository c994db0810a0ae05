//! Application constants for the sightings engine
//!
//! This module contains the fixed formats, default values, column names
//! and chart settings used throughout the crate.

// =============================================================================
// Source Data Layout
// =============================================================================

/// Default location of the BFRO report locations extract
pub const DEFAULT_DATA_PATH: &str = "data/bfro_report_locations.csv";

/// Required CSV columns, in the order they appear in the BFRO extract
pub mod columns {
    pub const TITLE: &str = "title";
    pub const CLASSIFICATION: &str = "classification";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const TIMESTAMP: &str = "timestamp";

    /// All columns a source must provide
    pub const REQUIRED: &[&str] = &[TITLE, CLASSIFICATION, LATITUDE, LONGITUDE, TIMESTAMP];
}

// =============================================================================
// Temporal Constants
// =============================================================================

/// Fixed UTC timestamp format of the `timestamp` column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Earliest year retained at load time (inclusive)
pub const MIN_SIGHTING_YEAR: i32 = 1900;

/// Latest year retained at load time (inclusive)
pub const MAX_SIGHTING_YEAR: i32 = 2017;

/// Abbreviated weekday labels in histogram order
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// =============================================================================
// Query Cache Defaults
// =============================================================================

/// Number of distinct filter strings kept in the query cache
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Seconds a cached filter result stays valid
pub const DEFAULT_CACHE_TTL_SECS: u64 = 10;

// =============================================================================
// Loading
// =============================================================================

/// Maximum number of malformed-row messages retained in load statistics
pub const MAX_RECORDED_LOAD_ERRORS: usize = 50;

/// Spinner refresh interval while loading, in rows
pub const PROGRESS_UPDATE_INTERVAL: usize = 500;

// =============================================================================
// Environment Variables
// =============================================================================

pub mod env_vars {
    /// Map display credential forwarded to the map figure
    pub const MAP_TOKEN: &str = "MAPBOX_KEY";
    pub const DATA_PATH: &str = "BIGFOOT_DATA_PATH";
    pub const CACHE_CAPACITY: &str = "BIGFOOT_CACHE_CAPACITY";
    pub const CACHE_TTL_SECS: &str = "BIGFOOT_CACHE_TTL_SECS";
    pub const LOG_LEVEL: &str = "BIGFOOT_LOG_LEVEL";
}

/// Log levels accepted by configuration and the CLI
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Chart Settings
// =============================================================================

/// Layout constants for the rendered figure specifications
pub mod charts {
    pub const MAP_CENTER_LAT: f64 = 40.0;
    pub const MAP_CENTER_LON: f64 = -98.5;
    pub const MAP_ZOOM: u32 = 2;
    pub const MAP_BEARING: u32 = 0;
    pub const MAP_PITCH: u32 = 0;
    pub const MAP_STYLE: &str = "outdoors";
    pub const MAP_MARKER_SIZE: u32 = 3;
    pub const MAP_MARKER_OPACITY: f64 = 1.0;

    pub const YEAR_TITLE: &str = "Sightings by Year";
    pub const WEEKDAY_TITLE: &str = "Sightings by Day of Week";
    pub const CLASS_TITLE: &str = "Sightings by Class";
    pub const CLASS_PIE_HOLE: f64 = 0.4;
}
