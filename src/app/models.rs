//! Data models for sighting processing
//!
//! This module contains the core data structures for representing BFRO
//! sighting reports and the calendar values derived from them.

use crate::app::services::temporal;
use crate::constants::WEEKDAY_LABELS;
use crate::Result;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// Sighting Structure
// =============================================================================

/// A single geotagged sighting report
///
/// Sightings are immutable once loaded. The timestamp is kept verbatim and
/// also parsed once at construction, so a `Sighting` always carries a valid
/// timestamp and the calendar accessors cannot fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sighting {
    /// Free-text report title, the field filters match against
    pub title: String,

    /// Report class label (e.g. "Class A")
    pub classification: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// UTC timestamp in `YYYY-MM-DDTHH:MM:SSZ` form
    pub timestamp: String,

    #[serde(skip)]
    observed_at: NaiveDateTime,
}

impl Sighting {
    /// Create a new sighting, validating the timestamp
    pub fn new(
        title: impl Into<String>,
        classification: impl Into<String>,
        latitude: f64,
        longitude: f64,
        timestamp: impl Into<String>,
    ) -> Result<Self> {
        let timestamp = timestamp.into();
        let observed_at = temporal::parse_timestamp(&timestamp)?;

        Ok(Self {
            title: title.into(),
            classification: classification.into(),
            latitude,
            longitude,
            timestamp,
            observed_at,
        })
    }

    /// Calendar year the sighting was reported for
    pub fn year(&self) -> i32 {
        temporal::year_from(&self.observed_at)
    }

    /// Day of week the sighting was reported for
    pub fn weekday(&self) -> Weekday {
        temporal::weekday_from(&self.observed_at)
    }

    /// Case-insensitive title match against an already lowercased needle
    pub fn title_contains_lowercase(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.title.to_lowercase().contains(needle_lower)
    }
}

// =============================================================================
// Weekday
// =============================================================================

/// Day of week, ordered Sunday first to match histogram layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// All weekdays in histogram order
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Position in histogram order (Sunday = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Abbreviated English label
    pub fn label(self) -> &'static str {
        WEEKDAY_LABELS[self.index()]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
