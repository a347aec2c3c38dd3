//! Event use-case service.
//!
//! # Responsibility
//! - Validate drafts, assign identities and append events to the store.
//! - Derive per-day and per-month views (events, conflicts, overflow) on demand.
//!
//! # Invariants
//! - A failed add or seed load leaves the store unchanged.
//! - Views are recomputed on every call; nothing is cached.

use crate::config::{CoreConfig, DEFAULT_VISIBLE_EVENTS_PER_DAY};
use crate::error::CalendarResult;
use crate::model::day_cell::DayCell;
use crate::model::event::{Event, EventDraft, EventId};
use crate::model::month::YearMonth;
use crate::repo::event_repo::EventRepository;
use crate::schedule::conflict::{conflicts_for_day, find_conflicts, ConflictSet};
use crate::schedule::grid::generate_month_grid;
use crate::service::seed::SeedSource;
use chrono::NaiveDate;
use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Everything the detail panel needs for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Ascending by start time.
    pub events: Vec<Event>,
    pub conflicts: ConflictSet,
    /// Number of leading events shown inside a grid cell.
    pub visible_count: usize,
    /// Events beyond `visible_count` ("+N more").
    pub overflow_count: usize,
}

impl DaySummary {
    fn new(date: NaiveDate, events: Vec<Event>, conflicts: ConflictSet, cap: usize) -> Self {
        let visible_count = events.len().min(cap);
        let overflow_count = events.len() - visible_count;
        Self {
            date,
            events,
            conflicts,
            visible_count,
            overflow_count,
        }
    }

    pub fn visible_events(&self) -> &[Event] {
        &self.events[..self.visible_count]
    }

    pub fn has_conflicts(&self) -> bool {
        self.conflicts.has_conflicts()
    }
}

/// One grid cell with its derived events and conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub cell: DayCell,
    pub summary: DaySummary,
}

/// Full 42-cell month view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub month: YearMonth,
    pub days: Vec<DayView>,
}

/// Calendar event service over a repository implementation.
pub struct EventService<R: EventRepository> {
    repo: R,
    visible_events_per_day: usize,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            visible_events_per_day: DEFAULT_VISIBLE_EVENTS_PER_DAY,
        }
    }

    pub fn with_config(repo: R, config: &CoreConfig) -> Self {
        Self {
            repo,
            visible_events_per_day: config.visible_events_per_day.max(1),
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Validates `draft`, assigns a fresh id and appends the event.
    ///
    /// # Errors
    /// - `CalendarError::Validation` for missing/malformed fields.
    /// - `CalendarError::Repo` for storage failures.
    pub fn add_event(&mut self, draft: &EventDraft) -> CalendarResult<Event> {
        let event = match draft.build(Uuid::new_v4()) {
            Ok(event) => event,
            Err(err) => {
                warn!(
                    "event=event_add module=service status=rejected error_code=validation error={}",
                    err
                );
                return Err(err.into());
            }
        };

        self.repo.insert_event(&event)?;
        info!(
            "event=event_add module=service status=ok event_id={} date={}",
            event.id(),
            event.date()
        );
        Ok(event)
    }

    /// Loads every draft from `source` as one batch.
    ///
    /// All drafts are validated first and the batch insert is all-or-nothing.
    pub fn load_seed<S: SeedSource + ?Sized>(&mut self, source: &S) -> CalendarResult<Vec<Event>> {
        let events = source
            .drafts()
            .iter()
            .map(|draft| draft.build(Uuid::new_v4()))
            .collect::<Result<Vec<_>, _>>()?;

        self.repo.insert_events(&events)?;
        info!(
            "event=seed_load module=service status=ok count={}",
            events.len()
        );
        Ok(events)
    }

    pub fn get_event(&self, id: EventId) -> CalendarResult<Option<Event>> {
        Ok(self.repo.get_event(id)?)
    }

    pub fn event_count(&self) -> CalendarResult<usize> {
        Ok(self.repo.count_events()?)
    }

    /// Events on `date`, ascending by start time (ties in insertion order).
    pub fn events_on_date(&self, date: NaiveDate) -> CalendarResult<Vec<Event>> {
        Ok(self.repo.events_on_date(date)?)
    }

    pub fn conflicts_on_date(&self, date: NaiveDate) -> CalendarResult<ConflictSet> {
        let events = self.repo.events_on_date(date)?;
        Ok(find_conflicts(&events)?)
    }

    pub fn day_summary(&self, date: NaiveDate) -> CalendarResult<DaySummary> {
        let events = self.repo.events_on_date(date)?;
        let conflicts = find_conflicts(&events)?;
        Ok(DaySummary::new(
            date,
            events,
            conflicts,
            self.visible_events_per_day,
        ))
    }

    /// Grid for `year`/`month0` with each cell's events and conflicts.
    pub fn month_view(&self, year: i32, month0: u32) -> CalendarResult<MonthView> {
        let grid = generate_month_grid(year, month0)?;
        let mut by_date: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        if let Some((from, to)) = grid.date_span() {
            for event in self.repo.events_between(from, to)? {
                by_date.entry(event.date()).or_default().push(event);
            }
        }

        let month = grid.month();
        let mut days = Vec::with_capacity(grid.cells().len());
        for cell in grid.into_cells() {
            let events = by_date.remove(&cell.date()).unwrap_or_default();
            let conflicts = conflicts_for_day(&events.iter().collect::<Vec<_>>())?;
            let summary =
                DaySummary::new(cell.date(), events, conflicts, self.visible_events_per_day);
            days.push(DayView { cell, summary });
        }

        Ok(MonthView { month, days })
    }
}
