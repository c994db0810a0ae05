//! Load statistics for sighting sources

use crate::constants::MAX_RECORDED_LOAD_ERRORS;
use serde::Serialize;
use std::time::Duration;

/// Statistics about a single load of the sighting source
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadStats {
    /// Number of data rows encountered
    pub rows_read: usize,

    /// Number of sightings retained
    pub sightings_loaded: usize,

    /// Number of rows dropped because they could not be parsed
    pub malformed_rows: usize,

    /// Number of parsed rows dropped for falling outside the year range
    pub out_of_range: usize,

    /// Time taken to load
    pub load_duration: Duration,

    /// First malformed-row messages, capped for memory
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a malformed row message, keeping at most a fixed number
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.malformed_rows += 1;
        if self.errors.len() < MAX_RECORDED_LOAD_ERRORS {
            self.errors.push(message.into());
        }
    }

    /// Number of rows dropped for any reason
    pub fn rows_dropped(&self) -> usize {
        self.malformed_rows + self.out_of_range
    }

    /// Percentage of rows retained
    pub fn retention_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.sightings_loaded as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// Check if any malformed rows were found
    pub fn has_errors(&self) -> bool {
        self.malformed_rows > 0
    }

    /// One-line summary of the load
    pub fn summary(&self) -> String {
        format!(
            "Read {} rows, loaded {} sightings ({:.1}% retained; {} malformed, {} out of range) in {:.2}s",
            self.rows_read,
            self.sightings_loaded,
            self.retention_rate(),
            self.malformed_rows,
            self.out_of_range,
            self.load_duration.as_secs_f64()
        )
    }
}
