//! Event domain model.
//!
//! # Responsibility
//! - Define the canonical scheduled-event record and its creation draft.
//! - Own draft validation so every stored event satisfies model invariants.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused.
//! - `title` is non-empty after trimming.
//! - `duration_minutes > 0`.
//! - Events are immutable after creation; replacement is the only edit path.

use crate::schedule::time::{parse_date, parse_time, DateParseError, TimeParseError};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Stable identifier for every stored event.
pub type EventId = Uuid;

/// Duration applied when a draft leaves it unspecified.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Event category.
///
/// Unrecognized values survive as `Other` so storage keeps them verbatim;
/// display code should go through [`EventType::display_type`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    #[default]
    Meeting,
    Review,
    Presentation,
    Planning,
    Workshop,
    Demo,
    Personal,
    Other(String),
}

impl EventType {
    /// Every recognized category, in form order.
    pub const KNOWN: [EventType; 7] = [
        EventType::Meeting,
        EventType::Review,
        EventType::Presentation,
        EventType::Planning,
        EventType::Workshop,
        EventType::Demo,
        EventType::Personal,
    ];

    /// Parses a stored or user-entered type string.
    ///
    /// Known names match after trimming. Blank input maps to `Meeting`; any
    /// other value is kept untrimmed in `Other`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "meeting" => Self::Meeting,
            "review" => Self::Review,
            "presentation" => Self::Presentation,
            "planning" => Self::Planning,
            "workshop" => Self::Workshop,
            "demo" => Self::Demo,
            "personal" => Self::Personal,
            "" => Self::Meeting,
            _ => Self::Other(value.to_string()),
        }
    }

    /// Storage string, verbatim for `Other`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Meeting => "meeting",
            Self::Review => "review",
            Self::Presentation => "presentation",
            Self::Planning => "planning",
            Self::Workshop => "workshop",
            Self::Demo => "demo",
            Self::Personal => "personal",
            Self::Other(value) => value.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Category used for presentation; unknown values fall back to `Meeting`.
    pub fn display_type(&self) -> EventType {
        match self {
            Self::Other(_) => Self::Meeting,
            known => known.clone(),
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        Self::parse(value.as_str())
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        value.as_str().to_string()
    }
}

/// Canonical scheduled event.
///
/// Fields are read through accessors; only this crate constructs events,
/// through [`EventDraft::build`] or validated repository reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub(crate) id: EventId,
    pub(crate) title: String,
    pub(crate) date: NaiveDate,
    #[serde(with = "hour_minute")]
    pub(crate) time: NaiveTime,
    #[serde(rename = "duration")]
    pub(crate) duration_minutes: u32,
    #[serde(rename = "type")]
    pub(crate) kind: EventType,
    pub(crate) location: Option<String>,
    pub(crate) description: Option<String>,
}

impl Event {
    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Start time-of-day.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Stored category (may be an unrecognized verbatim value).
    pub fn kind(&self) -> &EventType {
        &self.kind
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Draft validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("event title must not be empty")]
    MissingTitle,
    #[error("event date is required")]
    MissingDate,
    #[error("event time is required")]
    MissingTime,
    #[error("event date is invalid: {0}")]
    InvalidDate(#[from] DateParseError),
    #[error("event time is invalid: {0}")]
    InvalidTime(#[from] TimeParseError),
    #[error("event duration must be a positive number of minutes, got {0}")]
    InvalidDuration(i64),
}

/// Unvalidated event creation input, shaped like the add-event form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDraft {
    pub title: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, 24-hour clock.
    pub time: String,
    /// Minutes; `None` means [`DEFAULT_DURATION_MINUTES`].
    pub duration: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub description: String,
}

impl EventDraft {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            time: time.into(),
            ..Self::default()
        }
    }

    /// Empty draft pre-filled with `date`, as the add-event form does for a
    /// selected day.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validates the draft and builds an event carrying `id`.
    ///
    /// # Errors
    /// - Missing title, date or time.
    /// - Malformed date (`YYYY-MM-DD`) or time (`HH:MM`).
    /// - Non-positive or oversized duration.
    pub fn build(&self, id: EventId) -> Result<Event, EventValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(EventValidationError::MissingTitle);
        }
        if self.date.trim().is_empty() {
            return Err(EventValidationError::MissingDate);
        }
        if self.time.trim().is_empty() {
            return Err(EventValidationError::MissingTime);
        }

        let date = parse_date(self.date.as_str())?;
        let time = parse_time(self.time.as_str())?;
        let duration_minutes = normalize_duration(self.duration)?;

        Ok(Event {
            id,
            title: title.to_string(),
            date,
            time,
            duration_minutes,
            kind: EventType::parse(&self.kind),
            location: non_blank(&self.location),
            description: non_blank(&self.description),
        })
    }
}

fn normalize_duration(value: Option<i64>) -> Result<u32, EventValidationError> {
    match value {
        None => Ok(DEFAULT_DURATION_MINUTES),
        Some(minutes) if minutes > 0 => {
            u32::try_from(minutes).map_err(|_| EventValidationError::InvalidDuration(minutes))
        }
        Some(minutes) => Err(EventValidationError::InvalidDuration(minutes)),
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Serializes start times as `HH:MM` to match the draft wire shape.
mod hour_minute {
    use chrono::NaiveTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }
}
