//! Sighting counts per classification

use super::{ClassGrouper, ClassMap};
use crate::app::models::Sighting;

/// Class label → sighting count, in first-seen order
pub type ClassHistogram = ClassMap<usize>;

impl ClassHistogram {
    /// Sum of all class counts
    pub fn total(&self) -> usize {
        self.values().sum()
    }
}

/// Count sightings per classification
pub fn class_histogram<'a, I>(sightings: I) -> ClassHistogram
where
    I: IntoIterator<Item = &'a Sighting>,
{
    let mut counts: ClassGrouper<usize> = ClassGrouper::new();
    for sighting in sightings {
        *counts.slot(&sighting.classification) += 1;
    }
    counts.finish()
}
