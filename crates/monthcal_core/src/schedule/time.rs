//! Time-of-day parsing, formatting and interval arithmetic.
//!
//! # Invariants
//! - Intervals are half-open `[start, end)` in minutes from midnight.
//! - Interval ends are not wrapped; only display formatting wraps at 24h.

use chrono::{NaiveDate, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid time regex"));

/// `HH:MM` parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time must not be empty")]
    Empty,
    #[error("expected HH:MM, got `{0}`")]
    Malformed(String),
    #[error("time is out of range: `{0}`")]
    OutOfRange(String),
}

/// `YYYY-MM-DD` parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("date must not be empty")]
    Empty,
    #[error("expected YYYY-MM-DD, got `{0}`")]
    Malformed(String),
}

/// Parses a 24-hour `HH:MM` (or `H:MM`) string.
pub fn parse_time(value: &str) -> Result<NaiveTime, TimeParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let captures = TIME_RE
        .captures(trimmed)
        .ok_or_else(|| TimeParseError::Malformed(trimmed.to_string()))?;
    let hour = captures[1]
        .parse::<u32>()
        .map_err(|_| TimeParseError::Malformed(trimmed.to_string()))?;
    let minute = captures[2]
        .parse::<u32>()
        .map_err(|_| TimeParseError::Malformed(trimmed.to_string()))?;

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| TimeParseError::OutOfRange(trimmed.to_string()))
}

/// Parses an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| DateParseError::Malformed(trimmed.to_string()))
}

pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Clock time `duration_minutes` after `start`, wrapped onto the same clock face.
pub fn end_time(start: NaiveTime, duration_minutes: u32) -> NaiveTime {
    let total = (minutes_of_day(start) + duration_minutes % MINUTES_PER_DAY) % MINUTES_PER_DAY;
    NaiveTime::from_hms_opt(total / 60, total % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// Formats a time on the 12-hour clock.
///
/// Whole hours drop the minutes: `00:00` is `12 AM`, `13:05` is `1:05 PM`.
pub fn format_time(time: NaiveTime) -> String {
    let hour = time.hour();
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        other => other,
    };

    match time.minute() {
        0 => format!("{display_hour} {suffix}"),
        minute => format!("{display_hour}:{minute:02} {suffix}"),
    }
}

/// Parses then formats an `HH:MM` string.
pub fn format_time_str(value: &str) -> Result<String, TimeParseError> {
    parse_time(value).map(format_time)
}

/// Formats `"<start> - <end>"`, wrapping the end past midnight.
pub fn format_interval(start: NaiveTime, duration_minutes: u32) -> String {
    format!(
        "{} - {}",
        format_time(start),
        format_time(end_time(start, duration_minutes))
    )
}

/// Half-open time-of-day interval on a common reference day.
///
/// Bounds are `u64` so any `u32` duration fits without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: u64,
    pub end: u64,
}

impl TimeInterval {
    pub fn new(start: NaiveTime, duration_minutes: u32) -> Self {
        let start = u64::from(minutes_of_day(start));
        Self {
            start,
            end: start + u64::from(duration_minutes),
        }
    }

    /// Back-to-back intervals do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Shared minutes, zero when disjoint.
    ///
    /// Never exceeds the shorter duration, so it always fits in `u32`.
    pub fn overlap_minutes(&self, other: &TimeInterval) -> u32 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        u32::try_from(end.saturating_sub(start)).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        end_time, format_interval, format_time_str, parse_time, TimeInterval, TimeParseError,
    };
    use chrono::NaiveTime;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn format_time_covers_midnight_noon_and_afternoon() {
        assert_eq!(format_time_str("00:00").unwrap(), "12 AM");
        assert_eq!(format_time_str("12:00").unwrap(), "12 PM");
        assert_eq!(format_time_str("13:05").unwrap(), "1:05 PM");
        assert_eq!(format_time_str("09:30").unwrap(), "9:30 AM");
        assert_eq!(format_time_str("00:45").unwrap(), "12:45 AM");
    }

    #[test]
    fn parse_time_rejects_bad_input() {
        assert_eq!(parse_time(" ").unwrap_err(), TimeParseError::Empty);
        assert!(matches!(
            parse_time("9am").unwrap_err(),
            TimeParseError::Malformed(_)
        ));
        assert!(matches!(
            parse_time("24:00").unwrap_err(),
            TimeParseError::OutOfRange(_)
        ));
        assert_eq!(parse_time("7:05").unwrap(), hm(7, 5));
    }

    #[test]
    fn end_time_wraps_past_midnight() {
        assert_eq!(end_time(hm(23, 30), 90), hm(1, 0));
        assert_eq!(format_interval(hm(23, 30), 90), "11:30 PM - 1 AM");
        assert_eq!(format_interval(hm(9, 0), 30), "9 AM - 9:30 AM");
    }

    #[test]
    fn intervals_are_half_open() {
        let first = TimeInterval::new(hm(9, 0), 30);
        let adjacent = TimeInterval::new(hm(9, 30), 30);
        let overlapping = TimeInterval::new(hm(9, 15), 30);

        assert!(!first.overlaps(&adjacent));
        assert!(first.overlaps(&overlapping));
        assert_eq!(first.overlap_minutes(&overlapping), 15);
        assert_eq!(first.overlap_minutes(&adjacent), 0);
    }

    #[test]
    fn maximal_duration_does_not_overflow() {
        let late = TimeInterval::new(hm(23, 59), u32::MAX);
        let early = TimeInterval::new(hm(0, 0), u32::MAX);

        assert_eq!(late.end, 1439 + u64::from(u32::MAX));
        assert!(late.overlaps(&early));
        assert_eq!(late.overlap_minutes(&early), u32::MAX - 1439);
    }
}
