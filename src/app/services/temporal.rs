//! Timestamp parsing and calendar derivations for sightings
//!
//! The fixed `YYYY-MM-DDTHH:MM:SSZ` format is parsed only here. Everything
//! else derives years and weekdays through these functions, so the format is
//! a single point of change.

use crate::app::models::Weekday;
use crate::constants::TIMESTAMP_FORMAT;
use crate::{Error, Result};
use chrono::{Datelike, NaiveDateTime};

/// Parse a sighting timestamp in the fixed UTC format
pub fn parse_timestamp(timestamp: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map_err(|e| Error::malformed_timestamp(timestamp, e))
}

/// Calendar year of a timestamp
pub fn year_of(timestamp: &str) -> Result<i32> {
    parse_timestamp(timestamp).map(|dt| year_from(&dt))
}

/// Abbreviated weekday of a timestamp
pub fn weekday_of(timestamp: &str) -> Result<Weekday> {
    parse_timestamp(timestamp).map(|dt| weekday_from(&dt))
}

/// Calendar year of an already parsed timestamp
pub fn year_from(datetime: &NaiveDateTime) -> i32 {
    datetime.year()
}

/// Weekday of an already parsed timestamp
pub fn weekday_from(datetime: &NaiveDateTime) -> Weekday {
    Weekday::from(datetime.weekday())
}

/// Whether a year falls inside the retained range (both ends inclusive)
pub fn year_in_range(year: i32, min_year: i32, max_year: i32) -> bool {
    (min_year..=max_year).contains(&year)
}
