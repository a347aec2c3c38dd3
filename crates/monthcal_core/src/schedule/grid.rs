//! Six-week month grid generation.
//!
//! # Responsibility
//! - Produce the ordered 42-cell grid for any month, Monday-first.
//!
//! # Invariants
//! - Output length is always [`GRID_CELLS`].
//! - Current-month cells are contiguous and number exactly `days_in_month`.
//! - Leading cells come from the previous month, trailing cells from the next.

use crate::model::day_cell::{DayCell, MonthPosition};
pub use crate::model::month::GridError;
use crate::model::month::YearMonth;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = 6;
pub const GRID_CELLS: usize = DAYS_PER_WEEK * GRID_WEEKS;

/// Generated grid for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    month: YearMonth,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<DayCell> {
        self.cells
    }

    /// Six rows of seven cells, Monday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn current_month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells
            .iter()
            .filter(|cell| cell.belongs_to_displayed_month())
    }

    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date() == date)
    }

    /// First and last dates covered by the grid.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.cells.first()?.date();
        let last = self.cells.last()?.date();
        Some((first, last))
    }
}

/// Number of days in a zero-based month.
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, GridError> {
    YearMonth::new(year, month0).map(|month| month.days_in_month())
}

/// Builds the 42-cell grid for `year`/`month0` (0 = January).
///
/// # Errors
/// - `month0` outside `0..=11`.
/// - Grid dates outside the representable calendar range.
pub fn generate_month_grid(year: i32, month0: u32) -> Result<MonthGrid, GridError> {
    grid_for(YearMonth::new(year, month0)?)
}

/// Builds the grid for an already validated month.
pub fn grid_for(month: YearMonth) -> Result<MonthGrid, GridError> {
    let out_of_range = || GridError::OutOfRange {
        year: month.year(),
        month0: month.month0(),
    };

    let leading = month.first_day().weekday().num_days_from_monday();
    let mut cells = Vec::with_capacity(GRID_CELLS);

    if leading > 0 {
        let previous = month.previous()?;
        let previous_last = previous.days_in_month();
        for offset in (0..leading).rev() {
            let date = previous
                .day(previous_last - offset)
                .ok_or_else(out_of_range)?;
            push_cell(&mut cells, date, MonthPosition::Previous);
        }
    }

    for day in 1..=month.days_in_month() {
        let date = month.day(day).ok_or_else(out_of_range)?;
        push_cell(&mut cells, date, MonthPosition::Current);
    }

    if cells.len() < GRID_CELLS {
        let next = month.next()?;
        let mut day = 1;
        while cells.len() < GRID_CELLS {
            let date = next.day(day).ok_or_else(out_of_range)?;
            push_cell(&mut cells, date, MonthPosition::Next);
            day += 1;
        }
    }

    Ok(MonthGrid { month, cells })
}

fn push_cell(cells: &mut Vec<DayCell>, date: NaiveDate, position: MonthPosition) {
    // index % 7 is below 7
    let column = (cells.len() % DAYS_PER_WEEK) as u8;
    cells.push(DayCell::new(date, position, column));
}

#[cfg(test)]
mod tests {
    use super::{generate_month_grid, GRID_CELLS};
    use crate::model::day_cell::MonthPosition;
    use chrono::NaiveDate;

    #[test]
    fn august_2025_starts_on_friday_column() {
        let grid = generate_month_grid(2025, 7).unwrap();
        let cells = grid.cells();

        assert_eq!(cells.len(), GRID_CELLS);
        assert_eq!(cells[0].date(), NaiveDate::from_ymd_opt(2025, 7, 28).unwrap());
        assert_eq!(cells[0].position(), MonthPosition::Previous);
        assert_eq!(cells[4].date(), NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
        assert_eq!(cells[4].weekday_column(), 4);
        assert_eq!(cells[41].date(), NaiveDate::from_ymd_opt(2025, 9, 7).unwrap());
        assert_eq!(cells[41].position(), MonthPosition::Next);
    }

    #[test]
    fn month_starting_on_monday_has_no_leading_cells() {
        // September 2025 starts on a Monday.
        let grid = generate_month_grid(2025, 8).unwrap();
        assert!(grid.cells()[0].belongs_to_displayed_month());
        assert_eq!(grid.cells()[0].day(), 1);
    }
}
