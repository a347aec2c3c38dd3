//! Calendar month value type.
//!
//! # Invariants
//! - `month0` is always within `0..=11`.
//! - The first day of a constructed month is representable by `chrono`.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

/// Month construction and grid generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("month index must be within 0..=11, got {0}")]
    InvalidMonthIndex(u32),
    #[error("month {month0} of year {year} is outside the supported calendar range")]
    OutOfRange { year: i32, month0: u32 },
}

/// A (year, zero-based month) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct YearMonth {
    year: i32,
    month0: u32,
}

impl YearMonth {
    pub fn new(year: i32, month0: u32) -> Result<Self, GridError> {
        if month0 > 11 {
            return Err(GridError::InvalidMonthIndex(month0));
        }
        if NaiveDate::from_ymd_opt(year, month0 + 1, 1).is_none() {
            return Err(GridError::OutOfRange { year, month0 });
        }
        Ok(Self { year, month0 })
    }

    /// Month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index (January is 0).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// One-based month number (January is 1).
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            2 if NaiveDate::from_ymd_opt(self.year, 2, 29).is_some() => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month(), 1).unwrap_or(NaiveDate::MIN)
    }

    /// Date of `day` in this month, `None` when `day` is outside `1..=days_in_month`.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// Shifts by `delta` months, rolling over year boundaries.
    pub fn add_months(&self, delta: i32) -> Result<Self, GridError> {
        let index = i64::from(self.year) * 12 + i64::from(self.month0) + i64::from(delta);
        let year = i32::try_from(index.div_euclid(12)).map_err(|_| GridError::OutOfRange {
            year: self.year,
            month0: self.month0,
        })?;
        // rem_euclid(12) is within 0..12
        let month0 = index.rem_euclid(12) as u32;
        Self::new(year, month0)
    }

    pub fn previous(&self) -> Result<Self, GridError> {
        self.add_months(-1)
    }

    pub fn next(&self) -> Result<Self, GridError> {
        self.add_months(1)
    }
}

#[cfg(test)]
mod tests {
    use super::{GridError, YearMonth};

    #[test]
    fn new_rejects_month_index_twelve() {
        assert_eq!(
            YearMonth::new(2025, 12).unwrap_err(),
            GridError::InvalidMonthIndex(12)
        );
    }

    #[test]
    fn add_months_rolls_over_both_directions() {
        let december = YearMonth::new(2024, 11).unwrap();
        assert_eq!(december.next().unwrap(), YearMonth::new(2025, 0).unwrap());

        let january = YearMonth::new(2025, 0).unwrap();
        assert_eq!(january.previous().unwrap(), december);
        assert_eq!(
            january.add_months(-25).unwrap(),
            YearMonth::new(2022, 11).unwrap()
        );
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(YearMonth::new(2024, 1).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 1).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(1900, 1).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2000, 1).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 8).unwrap().days_in_month(), 30);
    }
}
