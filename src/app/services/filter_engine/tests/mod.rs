//! Shared test utilities and fixtures for filter engine tests

use crate::app::models::Sighting;
use crate::app::services::sighting_loader::SightingStore;


/// Create a test sighting
pub fn create_test_sighting(title: &str, class: &str, timestamp: &str) -> Sighting {
    Sighting::new(title, class, 45.0, -120.0, timestamp).unwrap()
}

/// Store with a mix of titles, classes and years
pub fn create_test_store() -> SightingStore {
    SightingStore::from_sightings(vec![
        create_test_sighting("Heard growling", "Class A", "2001-06-15T21:30:00Z"),
        create_test_sighting("Saw tracks", "Class A", "2015-03-01T10:00:00Z"),
        create_test_sighting("Heard howling at night", "Class B", "2015-08-22T02:15:00Z"),
        create_test_sighting("HEARD knocks near camp", "Class B", "1998-10-03T19:00:00Z"),
        create_test_sighting("Strange smell", "Class C", "2009-05-30T12:00:00Z"),
        create_test_sighting("Größer Fußabdruck gefunden", "Class A", "2012-11-11T11:11:00Z"),
    ])
}

/// Queries exercised by property-style tests
pub const TEST_QUERIES: &[&str] = &[
    "",
    "heard",
    "Heard",
    "HEARD",
    "saw",
    "night",
    "e",
    " ",
    "zzz-no-match",
    "fußabdruck",
    "größer",
];
