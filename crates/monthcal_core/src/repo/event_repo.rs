//! Event repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the append-only storage contract shared by all event stores.
//! - Provide the default process-memory store.
//!
//! # Invariants
//! - `insert_event` and `insert_events` are the only mutation primitives.
//! - Event ids are unique; a duplicate insert leaves the store unchanged.
//! - `insert_events` is all-or-nothing.
//! - Date queries return events by ascending start time, ties in insertion order.

use crate::db::DbError;
use crate::model::event::{Event, EventId, EventValidationError};
use chrono::NaiveDate;
use std::collections::HashSet;
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for event persistence and query operations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] EventValidationError),
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("event id already exists: {0}")]
    DuplicateId(EventId),
    #[error("invalid persisted event data: {0}")]
    InvalidData(String),
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for scheduled events.
///
/// Implementations only ever receive events that already passed draft
/// validation.
pub trait EventRepository {
    /// Appends one event.
    fn insert_event(&mut self, event: &Event) -> RepoResult<()>;
    /// Appends a batch in order; on error none of the batch is stored.
    fn insert_events(&mut self, events: &[Event]) -> RepoResult<()>;
    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>>;
    /// Events on `date`, ascending by start time, ties in insertion order.
    fn events_on_date(&self, date: NaiveDate) -> RepoResult<Vec<Event>>;
    /// Events within `from..=to`, ordered by date then as `events_on_date`.
    fn events_between(&self, from: NaiveDate, to: NaiveDate) -> RepoResult<Vec<Event>>;
    /// All events in insertion order.
    fn list_events(&self) -> RepoResult<Vec<Event>>;
    fn count_events(&self) -> RepoResult<usize>;
}

/// Process-memory event store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    events: Vec<Event>,
    ids: HashSet<EventId>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn collect_sorted(&self, keep: impl Fn(&Event) -> bool) -> Vec<Event> {
        let mut matched = self
            .events
            .iter()
            .filter(|event| keep(event))
            .cloned()
            .collect::<Vec<_>>();
        // Stable sort keeps insertion order for equal keys.
        matched.sort_by_key(|event| (event.date(), event.time()));
        matched
    }
}

impl EventRepository for InMemoryEventRepository {
    fn insert_event(&mut self, event: &Event) -> RepoResult<()> {
        if !self.ids.insert(event.id()) {
            return Err(RepoError::DuplicateId(event.id()));
        }
        self.events.push(event.clone());
        Ok(())
    }

    fn insert_events(&mut self, events: &[Event]) -> RepoResult<()> {
        let mut batch_ids = HashSet::with_capacity(events.len());
        for event in events {
            if self.ids.contains(&event.id()) || !batch_ids.insert(event.id()) {
                return Err(RepoError::DuplicateId(event.id()));
            }
        }
        self.ids.extend(batch_ids);
        self.events.extend_from_slice(events);
        Ok(())
    }

    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>> {
        Ok(self.events.iter().find(|event| event.id() == id).cloned())
    }

    fn events_on_date(&self, date: NaiveDate) -> RepoResult<Vec<Event>> {
        Ok(self.collect_sorted(|event| event.date() == date))
    }

    fn events_between(&self, from: NaiveDate, to: NaiveDate) -> RepoResult<Vec<Event>> {
        Ok(self.collect_sorted(|event| event.date() >= from && event.date() <= to))
    }

    fn list_events(&self) -> RepoResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn count_events(&self) -> RepoResult<usize> {
        Ok(self.events.len())
    }
}
