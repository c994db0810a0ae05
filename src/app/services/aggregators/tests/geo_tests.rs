//! Tests for the geographic aggregation

use super::*;
use crate::app::services::aggregators::{GeoPoint, geo_by_class};

#[test]
fn test_geo_groups_by_class_in_first_seen_order() {
    let sightings = create_mixed_sightings();

    let geo = geo_by_class(&sightings);

    assert_eq!(geo.keys().collect::<Vec<_>>(), vec!["Class B", "Class A", "Class C"]);
    assert_eq!(geo.len(), 3);

    let class_b = geo.get("Class B").unwrap();
    let titles: Vec<&str> = class_b.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Heard growling", "Heard howling", "Rock thrown"]);
    assert_eq!(
        class_b[0],
        GeoPoint {
            latitude: 47.5,
            longitude: -121.9,
            title: "Heard growling".to_string(),
        }
    );
}

#[test]
fn test_geo_omits_absent_classes() {
    let sightings = create_mixed_sightings();
    let only_a: Vec<_> = sightings
        .iter()
        .filter(|s| s.classification == "Class A")
        .collect();

    let geo = geo_by_class(only_a);

    assert_eq!(geo.len(), 1);
    assert!(geo.contains("Class A"));
    assert!(!geo.contains("Class B"));
}

#[test]
fn test_geo_empty_input() {
    let geo = geo_by_class(&Vec::<Sighting>::new());

    assert!(geo.is_empty());
    assert_eq!(serde_json::to_string(&geo).unwrap(), "{}");
}

#[test]
fn test_geo_point_count_matches_input() {
    let sightings = create_mixed_sightings();

    let geo = geo_by_class(&sightings);
    let total: usize = geo.values().map(Vec::len).sum();

    assert_eq!(total, sightings.len());
}
