//! Per-date event buckets with deterministic intra-day ordering.
//!
//! The index is rebuilt from scratch from the full collection on every
//! render; it holds no state between builds and performs no incremental
//! updates. Rebuilding is cheap at calendar scale and keeps the render a
//! pure function of the snapshot.

use std::collections::BTreeMap;

use crate::types::{CalendarDate, Event};

/// Events grouped by calendar date, each bucket sorted for display.
///
/// Grouping is an exact date match: an event belongs to exactly one day.
/// Within a bucket events sort ascending by start time in
/// minutes-since-midnight; ties keep their relative input order (the sort
/// is stable), which fixes the visual stacking order in week view and the
/// badge order in month view.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    buckets: BTreeMap<CalendarDate, Vec<Event>>,
    total: usize,
}

impl EventIndex {
    /// Build the index from a snapshot of the event collection.
    pub fn build(events: &[Event]) -> Self {
        let mut buckets: BTreeMap<CalendarDate, Vec<Event>> = BTreeMap::new();
        for event in events {
            buckets.entry(event.date).or_default().push(event.clone());
        }
        for bucket in buckets.values_mut() {
            // Vec::sort_by_key is stable, so equal start times preserve
            // input order.
            bucket.sort_by_key(|e| e.start_time.minutes_since_midnight());
        }
        let total = events.len();
        Self { buckets, total }
    }

    /// The ordered events for one date. Empty slice for dates with no events.
    pub fn bucket(&self, date: CalendarDate) -> &[Event] {
        self.buckets.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The dates that have at least one event, in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.buckets.keys().copied()
    }

    /// Total number of indexed events across all buckets.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
