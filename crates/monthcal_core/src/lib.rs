//! Core domain logic for the month calendar.
//! This crate is the single source of truth for scheduling invariants.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;

pub use config::CoreConfig;
pub use error::{CalendarError, CalendarResult};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::day_cell::{DayCell, MonthPosition};
pub use model::event::{
    Event, EventDraft, EventId, EventType, EventValidationError, DEFAULT_DURATION_MINUTES,
};
pub use model::month::{GridError, YearMonth};
pub use repo::event_repo::{EventRepository, InMemoryEventRepository, RepoError, RepoResult};
pub use repo::sqlite_event_repo::SqliteEventRepository;
pub use schedule::conflict::{
    find_conflicts, find_conflicts_by_date, ConflictError, ConflictPair, ConflictSet,
};
pub use schedule::grid::{days_in_month, generate_month_grid, MonthGrid, GRID_CELLS};
pub use schedule::time::{format_interval, format_time, format_time_str, parse_time};
pub use service::event_service::{DaySummary, DayView, EventService, MonthView};
pub use service::navigation::{CalendarNavigator, Clock, FixedClock, NavigationError, SystemClock};
pub use service::seed::{SampleSeed, SeedSource};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
