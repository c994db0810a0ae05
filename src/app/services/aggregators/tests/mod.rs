//! Shared fixtures for aggregator tests

use crate::app::models::Sighting;

pub mod geo_tests;

/// Create a test sighting with explicit coordinates
pub fn create_test_sighting(
    title: &str,
    class: &str,
    lat: f64,
    lon: f64,
    timestamp: &str,
) -> Sighting {
    Sighting::new(title, class, lat, lon, timestamp).unwrap()
}

/// Sightings spanning three classes, several years and weekdays
///
/// Weekdays: 2001-06-15 Fri, 2015-03-01 Sun, 2015-08-22 Sat,
/// 2015-03-02 Mon, 2001-06-16 Sat, 1999-12-31 Fri.
pub fn create_mixed_sightings() -> Vec<Sighting> {
    vec![
        create_test_sighting("Heard growling", "Class B", 47.5, -121.9, "2001-06-15T21:30:00Z"),
        create_test_sighting("Saw tracks", "Class A", 45.1, -122.6, "2015-03-01T10:00:00Z"),
        create_test_sighting("Heard howling", "Class B", 44.0, -120.5, "2015-08-22T02:15:00Z"),
        create_test_sighting("Saw figure", "Class A", 40.2, -110.1, "2015-03-02T06:00:00Z"),
        create_test_sighting("Odd smell", "Class C", 35.0, -90.0, "2001-06-16T23:59:59Z"),
        create_test_sighting("Rock thrown", "Class B", 38.0, -80.0, "1999-12-31T08:00:00Z"),
    ]
}
