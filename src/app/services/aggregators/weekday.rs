//! Day-of-week histogram

use crate::app::models::{Sighting, Weekday};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Sighting counts for all seven weekdays, Sunday first
///
/// Always dense: weekdays without sightings count zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayHistogram {
    counts: [usize; 7],
}

impl WeekdayHistogram {
    /// Count for one weekday
    pub fn get(&self, day: Weekday) -> usize {
        self.counts[day.index()]
    }

    /// Counts in `Sun..Sat` order
    pub fn counts(&self) -> [usize; 7] {
        self.counts
    }

    /// `(weekday, count)` pairs in `Sun..Sat` order
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, usize)> + '_ {
        Weekday::ALL.iter().map(|&day| (day, self.get(day)))
    }

    /// Sum of all buckets
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of buckets, always seven
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no sightings were counted
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Serialize for WeekdayHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (day, count) in self.iter() {
            map.serialize_entry(day.label(), &count)?;
        }
        map.end()
    }
}

/// Count sightings per weekday, ignoring classification
pub fn weekday_histogram<'a, I>(sightings: I) -> WeekdayHistogram
where
    I: IntoIterator<Item = &'a Sighting>,
{
    let mut histogram = WeekdayHistogram::default();
    for sighting in sightings {
        histogram.counts[sighting.weekday().index()] += 1;
    }
    histogram
}
