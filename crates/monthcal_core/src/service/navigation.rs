//! Displayed-month and selected-day state.
//!
//! # Responsibility
//! - Track which month is shown and which day of it is selected.
//! - Expose pure transitions for navigation and selection commands.
//!
//! # Invariants
//! - `selected_day`, when set, is a valid day of the displayed month.
//! - Any month change clears the selection (except `go_to_today`, which
//!   selects today).
//! - Failed commands leave the state unchanged.

use crate::model::day_cell::DayCell;
use crate::model::event::EventDraft;
use crate::model::month::{GridError, YearMonth};
use crate::schedule::grid::{grid_for, MonthGrid};
use chrono::{Datelike, Local, NaiveDate};
use log::debug;
use thiserror::Error;

/// Wall-clock date source.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date, for tests and replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("day {day} is not part of {year}-{month:02}")]
    InvalidSelection { day: u32, year: i32, month: u32 },
    #[error(transparent)]
    Month(#[from] GridError),
}

/// Month navigation and day selection state machine.
#[derive(Debug, Clone)]
pub struct CalendarNavigator<C: Clock = SystemClock> {
    clock: C,
    month: YearMonth,
    selected_day: Option<u32>,
}

impl Default for CalendarNavigator<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> CalendarNavigator<C> {
    /// Starts on the clock's current month with nothing selected.
    pub fn new(clock: C) -> Self {
        let month = YearMonth::from_date(clock.today());
        Self {
            clock,
            month,
            selected_day: None,
        }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_day.and_then(|day| self.month.day(day))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Moves the displayed month by `delta` and clears the selection.
    pub fn navigate(&mut self, delta: i32) -> Result<YearMonth, NavigationError> {
        let target = self.month.add_months(delta)?;
        debug!(
            "event=navigate module=navigation status=ok delta={} year={} month={}",
            delta,
            target.year(),
            target.month()
        );
        self.month = target;
        self.selected_day = None;
        Ok(target)
    }

    /// Shows the current month and selects today.
    pub fn go_to_today(&mut self) -> NaiveDate {
        let today = self.clock.today();
        self.month = YearMonth::from_date(today);
        self.selected_day = Some(today.day());
        today
    }

    /// Selects `day` of the displayed month.
    ///
    /// # Errors
    /// - [`NavigationError::InvalidSelection`] when `day` is not in the month.
    pub fn select_day(&mut self, day: u32) -> Result<NaiveDate, NavigationError> {
        let date = self
            .month
            .day(day)
            .ok_or(NavigationError::InvalidSelection {
                day,
                year: self.month.year(),
                month: self.month.month(),
            })?;
        self.selected_day = Some(day);
        Ok(date)
    }

    /// Selects the day shown in `cell`; padding cells are rejected.
    pub fn select_cell(&mut self, cell: &DayCell) -> Result<NaiveDate, NavigationError> {
        if !self.month.contains(cell.date()) {
            return Err(NavigationError::InvalidSelection {
                day: cell.day(),
                year: self.month.year(),
                month: self.month.month(),
            });
        }
        self.select_day(cell.day())
    }

    pub fn clear_selection(&mut self) {
        self.selected_day = None;
    }

    /// Whether `cell` is today. Padding cells never count as today.
    pub fn is_today(&self, cell: &DayCell) -> bool {
        cell.belongs_to_displayed_month()
            && self.month.contains(cell.date())
            && cell.date() == self.clock.today()
    }

    /// Whether `cell` is the selected day of the displayed month.
    pub fn is_selected(&self, cell: &DayCell) -> bool {
        cell.belongs_to_displayed_month() && self.selected_date() == Some(cell.date())
    }

    /// Grid for the displayed month.
    pub fn grid(&self) -> Result<MonthGrid, GridError> {
        grid_for(self.month)
    }

    /// Blank add-event draft, pre-filled with the selected date if any.
    pub fn draft_for_selection(&self) -> EventDraft {
        self.selected_date()
            .map(EventDraft::for_date)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarNavigator, FixedClock, NavigationError};
    use chrono::NaiveDate;

    fn navigator_on(year: i32, month: u32, day: u32) -> CalendarNavigator<FixedClock> {
        CalendarNavigator::new(FixedClock(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        ))
    }

    #[test]
    fn select_day_rejects_day_outside_month_and_keeps_state() {
        let mut nav = navigator_on(2025, 2, 10);
        nav.select_day(28).unwrap();

        let err = nav.select_day(29).unwrap_err();
        assert_eq!(
            err,
            NavigationError::InvalidSelection {
                day: 29,
                year: 2025,
                month: 2
            }
        );
        assert_eq!(nav.selected_day(), Some(28));
    }

    #[test]
    fn draft_for_selection_prefills_date() {
        let mut nav = navigator_on(2025, 8, 1);
        assert_eq!(nav.draft_for_selection().date, "");

        nav.select_day(5).unwrap();
        assert_eq!(nav.draft_for_selection().date, "2025-08-05");
    }

    #[test]
    fn padding_cell_for_today_is_not_today() {
        let nav = navigator_on(2025, 7, 31);
        let mut next = nav.clone();
        next.navigate(1).unwrap();

        let grid = next.grid().unwrap();
        let padding = grid.cells()[0];
        assert_eq!(padding.date(), NaiveDate::from_ymd_opt(2025, 7, 28).unwrap());
        assert!(!padding.belongs_to_displayed_month());

        let today_cell = *grid
            .cell_for(NaiveDate::from_ymd_opt(2025, 7, 31).unwrap())
            .unwrap();
        assert!(!next.is_today(&today_cell));
    }
}
