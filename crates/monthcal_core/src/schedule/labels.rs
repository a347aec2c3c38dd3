//! Fixed display labels (no localization).

use crate::model::event::EventType;
use crate::model::month::YearMonth;
use chrono::{Datelike, NaiveDate};

pub const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const MONTH_FULL_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Grid column headers, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// Header label such as `Aug' 2025`.
pub fn month_heading(month: YearMonth) -> String {
    format!("{}' {}", MONTH_SHORT_NAMES[month.month0() as usize], month.year())
}

/// Detail label such as `August 5, 2025`.
pub fn day_heading(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        MONTH_FULL_NAMES[date.month0() as usize],
        date.day(),
        date.year()
    )
}

/// Capitalized label for the displayed category of `kind`.
pub fn event_type_label(kind: &EventType) -> &'static str {
    match kind.display_type() {
        EventType::Review => "Review",
        EventType::Presentation => "Presentation",
        EventType::Planning => "Planning",
        EventType::Workshop => "Workshop",
        EventType::Demo => "Demo",
        EventType::Personal => "Personal",
        EventType::Meeting | EventType::Other(_) => "Meeting",
    }
}
