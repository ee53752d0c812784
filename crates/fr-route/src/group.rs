//! Day Grouper.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use fr_core::Event;

/// Events bucketed by calendar date.  Iterates in ascending date order.
pub type DayBuckets<'a> = BTreeMap<NaiveDate, Vec<&'a Event>>;

/// Partition `events` by date.  No conflict detection happens here; an empty
/// slice yields an empty map.
pub fn group_by_date(events: &[Event]) -> DayBuckets<'_> {
    let mut days: DayBuckets<'_> = BTreeMap::new();
    for event in events {
        days.entry(event.date).or_default().push(event);
    }
    days
}

/// Order one day's events by start time, ties by id.  The enumerator relies
/// on this order for both correctness and determinism.
pub fn sort_day(day: &mut [&Event]) {
    day.sort_unstable_by_key(|e| (e.start, e.id));
}
