//! Same-day overlap detection.
//!
//! # Responsibility
//! - Report every pair of overlapping events within one calendar date.
//!
//! # Invariants
//! - Intervals are compared on time-of-day only, so inputs must share a date.
//!   [`find_conflicts`] rejects mixed dates; use [`find_conflicts_by_date`]
//!   for arbitrary event sets.
//! - Pairs are emitted once, in input order (`first` precedes `second`).
//!
//! Pairwise comparison is O(n^2) in the per-day event count. If days ever
//! carry large event counts, sort by start and sweep instead.

use crate::model::event::{Event, EventId};
use crate::schedule::time::TimeInterval;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictError {
    #[error("conflict detection requires events from a single date, got {first} and {other}")]
    MixedDates { first: NaiveDate, other: NaiveDate },
}

/// One unordered pair of overlapping events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConflictPair {
    pub first: EventId,
    pub second: EventId,
    pub overlap_minutes: u32,
}

impl ConflictPair {
    pub fn contains(&self, id: EventId) -> bool {
        self.first == id || self.second == id
    }

    /// Order-insensitive pair match.
    pub fn matches(&self, a: EventId, b: EventId) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

/// All conflicts found on one date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictSet {
    date: Option<NaiveDate>,
    pairs: Vec<ConflictPair>,
}

impl ConflictSet {
    /// Date the events were scheduled on; `None` for an empty input.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn pairs(&self) -> &[ConflictPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// A day "has conflicts" iff at least one pair overlaps.
    pub fn has_conflicts(&self) -> bool {
        !self.pairs.is_empty()
    }

    pub fn involves(&self, id: EventId) -> bool {
        self.pairs.iter().any(|pair| pair.contains(id))
    }

    pub fn contains_pair(&self, a: EventId, b: EventId) -> bool {
        self.pairs.iter().any(|pair| pair.matches(a, b))
    }
}

/// Finds all overlapping pairs among events scheduled on one date.
///
/// # Errors
/// - [`ConflictError::MixedDates`] when the input spans more than one date.
pub fn find_conflicts(events: &[Event]) -> Result<ConflictSet, ConflictError> {
    let refs = events.iter().collect::<Vec<_>>();
    conflicts_for_day(&refs)
}

/// Partitions `events` by date and detects conflicts per date.
///
/// Dates without any conflict are still present with an empty set.
pub fn find_conflicts_by_date(events: &[Event]) -> BTreeMap<NaiveDate, ConflictSet> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in events {
        by_date.entry(event.date()).or_default().push(event);
    }

    by_date
        .into_iter()
        .map(|(date, day_events)| {
            let set = ConflictSet {
                date: Some(date),
                pairs: pairwise(&day_events),
            };
            (date, set)
        })
        .collect()
}

pub(crate) fn conflicts_for_day(events: &[&Event]) -> Result<ConflictSet, ConflictError> {
    let date = events.first().map(|event| event.date());
    if let Some(first) = date {
        if let Some(other) = events.iter().map(|event| event.date()).find(|d| *d != first) {
            return Err(ConflictError::MixedDates { first, other });
        }
    }

    Ok(ConflictSet {
        date,
        pairs: pairwise(events),
    })
}

fn pairwise(events: &[&Event]) -> Vec<ConflictPair> {
    let intervals = events
        .iter()
        .map(|event| TimeInterval::new(event.time(), event.duration_minutes()))
        .collect::<Vec<_>>();

    let mut pairs = Vec::new();
    for i in 0..events.len() {
        for j in (i + 1)..events.len() {
            if intervals[i].overlaps(&intervals[j]) {
                pairs.push(ConflictPair {
                    first: events[i].id(),
                    second: events[j].id(),
                    overlap_minutes: intervals[i].overlap_minutes(&intervals[j]),
                });
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::{find_conflicts, find_conflicts_by_date, ConflictError};
    use crate::model::event::{Event, EventDraft};
    use uuid::Uuid;

    fn event(date: &str, time: &str, minutes: i64) -> Event {
        EventDraft::new("e", date, time)
            .with_duration(minutes)
            .build(Uuid::new_v4())
            .unwrap()
    }

    #[test]
    fn three_way_overlap_reports_every_pair() {
        let a = event("2025-08-05", "09:00", 120);
        let b = event("2025-08-05", "09:30", 30);
        let c = event("2025-08-05", "10:00", 30);
        let set = find_conflicts(&[a.clone(), b.clone(), c.clone()]).unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains_pair(a.id(), b.id()));
        assert!(set.contains_pair(c.id(), a.id()));
        assert!(!set.contains_pair(b.id(), c.id()));
    }

    #[test]
    fn mixed_dates_are_rejected_and_partition_helper_splits_them() {
        let a = event("2025-08-05", "09:00", 60);
        let b = event("2025-08-06", "09:00", 60);
        let err = find_conflicts(&[a.clone(), b.clone()]).unwrap_err();
        assert!(matches!(err, ConflictError::MixedDates { .. }));

        let by_date = find_conflicts_by_date(&[a, b]);
        assert_eq!(by_date.len(), 2);
        assert!(by_date.values().all(|set| !set.has_conflicts()));
    }

    #[test]
    fn empty_input_has_no_date_and_no_conflicts() {
        let set = find_conflicts(&[]).unwrap();
        assert_eq!(set.date(), None);
        assert!(!set.has_conflicts());
    }
}
