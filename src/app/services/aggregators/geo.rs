//! Geographic points grouped by classification

use super::{ClassGrouper, ClassMap};
use crate::app::models::Sighting;
use serde::Serialize;

/// One map marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
}

impl From<&Sighting> for GeoPoint {
    fn from(sighting: &Sighting) -> Self {
        Self {
            latitude: sighting.latitude,
            longitude: sighting.longitude,
            title: sighting.title.clone(),
        }
    }
}

/// Class label → markers in subset order
pub type GeoByClass = ClassMap<Vec<GeoPoint>>;

/// Partition sightings by class into map markers
///
/// Only classes with at least one sighting appear.
pub fn geo_by_class<'a, I>(sightings: I) -> GeoByClass
where
    I: IntoIterator<Item = &'a Sighting>,
{
    let mut groups: ClassGrouper<Vec<GeoPoint>> = ClassGrouper::new();
    for sighting in sightings {
        groups.slot(&sighting.classification).push(GeoPoint::from(sighting));
    }
    groups.finish()
}
