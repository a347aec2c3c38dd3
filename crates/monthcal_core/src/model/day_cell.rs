//! Month-grid cell descriptor.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Which month a grid cell comes from, relative to the displayed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthPosition {
    Previous,
    Current,
    Next,
}

/// One position of the 42-cell month grid.
///
/// Events and conflicts for the cell are derived on demand, never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayCell {
    date: NaiveDate,
    position: MonthPosition,
    /// 0 = Monday … 6 = Sunday.
    weekday_column: u8,
}

impl DayCell {
    pub(crate) fn new(date: NaiveDate, position: MonthPosition, weekday_column: u8) -> Self {
        Self {
            date,
            position,
            weekday_column,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Day-of-month number shown in the cell.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn position(&self) -> MonthPosition {
        self.position
    }

    pub fn belongs_to_displayed_month(&self) -> bool {
        self.position == MonthPosition::Current
    }

    pub fn weekday_column(&self) -> u8 {
        self.weekday_column
    }

    /// Saturday and Sunday columns.
    pub fn is_weekend(&self) -> bool {
        self.weekday_column >= 5
    }
}
