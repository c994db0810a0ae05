//! Yearly sighting counts grouped by classification

use super::{ClassGrouper, ClassMap};
use crate::app::models::Sighting;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of sightings in one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Class label → sparse year series, ascending by year
pub type YearSeriesByClass = ClassMap<Vec<YearCount>>;

/// Count sightings per year within each class
///
/// Years without sightings are omitted rather than zero-filled.
pub fn year_series_by_class<'a, I>(sightings: I) -> YearSeriesByClass
where
    I: IntoIterator<Item = &'a Sighting>,
{
    let mut groups: ClassGrouper<BTreeMap<i32, usize>> = ClassGrouper::new();
    for sighting in sightings {
        *groups
            .slot(&sighting.classification)
            .entry(sighting.year())
            .or_insert(0) += 1;
    }

    groups.finish().map_values(|counts| {
        counts
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect()
    })
}
