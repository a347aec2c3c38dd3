//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level calendar functions to Dart via FRB.
//! - Own the process-wide calendar session (event store + navigation state).
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every response carries `ok` and a human-readable `message`.
//! - A poisoned session lock is logged and recovered; later calls keep working.

use crate::style::{DefaultEventStyles, EventStyleLookup};
use chrono::NaiveDate;
use log::warn;
use monthcal_core::schedule::labels::{
    day_heading, event_type_label, month_heading, WEEKDAY_LABELS,
};
use monthcal_core::schedule::time::parse_date;
use monthcal_core::{
    core_version as core_version_inner, format_interval, format_time,
    init_logging as init_logging_inner, ping as ping_inner, CalendarNavigator, Clock, CoreConfig,
    Event, EventDraft, EventService, InMemoryEventRepository, SampleSeed, SystemClock,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

struct Session<C: Clock = SystemClock> {
    service: EventService<InMemoryEventRepository>,
    navigator: CalendarNavigator<C>,
}

impl<C: Clock> Session<C> {
    fn new(clock: C, config: &CoreConfig) -> Self {
        Self {
            service: EventService::with_config(InMemoryEventRepository::new(), config),
            navigator: CalendarNavigator::new(clock),
        }
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Displayed month and selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarStateResponse {
    pub ok: bool,
    pub message: String,
    pub year: i32,
    /// Zero-based month (January is 0).
    pub month0: u32,
    /// Header label such as `Aug' 2025`.
    pub heading: String,
    pub selected_day: Option<u32>,
    /// Today as `YYYY-MM-DD`.
    pub today: String,
}

impl CalendarStateResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            year: 0,
            month0: 0,
            heading: String::new(),
            selected_day: None,
            today: String::new(),
        }
    }
}

/// One rendered grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCellItem {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub day: u32,
    pub in_displayed_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_weekend: bool,
    pub event_count: u32,
    pub has_conflicts: bool,
    /// Leading events shown inside the cell.
    pub visible_events: Vec<EventItem>,
    /// Events hidden behind "+N more".
    pub overflow_count: u32,
}

/// 42-cell grid for the displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGridResponse {
    pub ok: bool,
    pub message: String,
    pub year: i32,
    pub month0: u32,
    pub heading: String,
    pub weekday_labels: Vec<String>,
    pub cells: Vec<GridCellItem>,
}

/// Event projection for list and cell rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    pub event_id: String,
    pub title: String,
    pub date: String,
    /// 24-hour `HH:MM`.
    pub time: String,
    /// 12-hour label such as `9 AM`.
    pub time_label: String,
    /// `"<start> - <end>"` label.
    pub range_label: String,
    pub duration_minutes: u32,
    /// Stored type string.
    pub kind: String,
    pub kind_label: String,
    pub icon: String,
    pub accent: String,
    pub text_color: String,
    pub background: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub in_conflict: bool,
}

/// Events of one date, ascending by start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListResponse {
    pub ok: bool,
    pub message: String,
    pub date: String,
    /// Detail label such as `August 5, 2025`.
    pub heading: String,
    pub items: Vec<EventItem>,
    pub has_conflicts: bool,
}

impl EventListResponse {
    fn failure(date: String, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            date,
            heading: String::new(),
            items: Vec::new(),
            has_conflicts: false,
        }
    }
}

/// Generic action response envelope for calendar commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventActionResponse {
    pub ok: bool,
    /// Created event id, when one was created.
    pub event_id: Option<String>,
    /// Number of events stored by the command.
    pub stored_count: u32,
    pub message: String,
}

impl EventActionResponse {
    fn success(message: impl Into<String>, event_id: Option<String>, stored_count: u32) -> Self {
        Self {
            ok: true,
            event_id,
            stored_count,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            event_id: None,
            stored_count: 0,
            message: message.into(),
        }
    }
}

/// Returns the displayed month and selection.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_state() -> CalendarStateResponse {
    with_session("calendar_state", |session| Ok(state_of(session)))
        .unwrap_or_else(CalendarStateResponse::failure)
}

/// Moves the displayed month by `delta` (negative = back) and clears the selection.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_navigate(delta: i32) -> CalendarStateResponse {
    with_session("calendar_navigate", |session| navigate(session, delta))
        .unwrap_or_else(CalendarStateResponse::failure)
}

/// Shows the current month and selects today.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_go_to_today() -> CalendarStateResponse {
    with_session("calendar_go_to_today", |session| {
        session.navigator.go_to_today();
        Ok(state_of(session))
    })
    .unwrap_or_else(CalendarStateResponse::failure)
}

/// Selects `day` of the displayed month; invalid days leave the state unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_select_day(day: u32) -> CalendarStateResponse {
    with_session("calendar_select_day", |session| select_day(session, day))
        .unwrap_or_else(CalendarStateResponse::failure)
}

/// Builds the grid for the displayed month with per-cell events.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_month_grid() -> MonthGridResponse {
    with_session("calendar_month_grid", |session| month_grid(session)).unwrap_or_else(|message| {
        MonthGridResponse {
            ok: false,
            message,
            year: 0,
            month0: 0,
            heading: String::new(),
            weekday_labels: Vec::new(),
            cells: Vec::new(),
        }
    })
}

/// Lists events on `date` (`YYYY-MM-DD`).
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_events_on_date(date: String) -> EventListResponse {
    let date = date.trim().to_string();
    with_session("calendar_events_on_date", |session| {
        events_on_date(session, date.as_str())
    })
    .unwrap_or_else(|message| EventListResponse::failure(date.clone(), message))
}

/// Validates and stores one event from add-event form input.
///
/// # FFI contract
/// - `duration_minutes=None` applies the 60-minute default.
/// - On validation failure nothing is stored and `message` names the field.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_add_event(
    title: String,
    date: String,
    time: String,
    duration_minutes: Option<i64>,
    kind: String,
    location: String,
    description: String,
) -> EventActionResponse {
    let draft = EventDraft {
        title,
        date,
        time,
        duration: duration_minutes,
        kind,
        location,
        description,
    };
    with_session("calendar_add_event", |session| add_event(session, &draft))
        .unwrap_or_else(EventActionResponse::failure)
}

/// Loads the built-in sample events into the session store.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_load_sample_events() -> EventActionResponse {
    with_session("calendar_load_sample_events", |session| {
        let loaded = session
            .service
            .load_seed(&SampleSeed)
            .map_err(|err| format!("calendar_load_sample_events failed: {err}"))?;
        Ok(EventActionResponse::success(
            format!("Loaded {} sample event(s).", loaded.len()),
            None,
            count_u32(loaded.len()),
        ))
    })
    .unwrap_or_else(EventActionResponse::failure)
}

fn with_session<T>(
    op: &str,
    f: impl FnOnce(&mut Session) -> Result<T, String>,
) -> Result<T, String> {
    let session =
        SESSION.get_or_init(|| Mutex::new(Session::new(SystemClock, &CoreConfig::from_env())));
    let mut guard = lock_recovering(session, op);
    f(&mut guard)
}

/// Locks `mutex`, taking over the state if a previous holder panicked.
fn lock_recovering<'a, S>(mutex: &'a Mutex<S>, op: &str) -> MutexGuard<'a, S> {
    mutex.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered op={op} error_code=poisoned");
        mutex.clear_poison();
        poisoned.into_inner()
    })
}

fn state_of<C: Clock>(session: &Session<C>) -> CalendarStateResponse {
    let month = session.navigator.month();
    CalendarStateResponse {
        ok: true,
        message: String::new(),
        year: month.year(),
        month0: month.month0(),
        heading: month_heading(month),
        selected_day: session.navigator.selected_day(),
        today: iso_date(session.navigator.today()),
    }
}

fn navigate<C: Clock>(
    session: &mut Session<C>,
    delta: i32,
) -> Result<CalendarStateResponse, String> {
    session
        .navigator
        .navigate(delta)
        .map_err(|err| format!("calendar_navigate failed: {err}"))?;
    Ok(state_of(session))
}

fn select_day<C: Clock>(
    session: &mut Session<C>,
    day: u32,
) -> Result<CalendarStateResponse, String> {
    session
        .navigator
        .select_day(day)
        .map_err(|err| format!("calendar_select_day failed: {err}"))?;
    Ok(state_of(session))
}

fn month_grid<C: Clock>(session: &Session<C>) -> Result<MonthGridResponse, String> {
    let month = session.navigator.month();
    let view = session
        .service
        .month_view(month.year(), month.month0())
        .map_err(|err| format!("calendar_month_grid failed: {err}"))?;

    let cells = view
        .days
        .iter()
        .map(|day| {
            let summary = &day.summary;
            GridCellItem {
                date: iso_date(day.cell.date()),
                day: day.cell.day(),
                in_displayed_month: day.cell.belongs_to_displayed_month(),
                is_today: session.navigator.is_today(&day.cell),
                is_selected: session.navigator.is_selected(&day.cell),
                is_weekend: day.cell.is_weekend(),
                event_count: count_u32(summary.events.len()),
                has_conflicts: summary.has_conflicts(),
                visible_events: summary
                    .visible_events()
                    .iter()
                    .map(|event| to_event_item(event, summary.conflicts.involves(event.id())))
                    .collect(),
                overflow_count: count_u32(summary.overflow_count),
            }
        })
        .collect();

    Ok(MonthGridResponse {
        ok: true,
        message: String::new(),
        year: month.year(),
        month0: month.month0(),
        heading: month_heading(month),
        weekday_labels: WEEKDAY_LABELS
            .iter()
            .map(|label| (*label).to_string())
            .collect(),
        cells,
    })
}

fn events_on_date<C: Clock>(
    session: &Session<C>,
    raw: &str,
) -> Result<EventListResponse, String> {
    let date = parse_date(raw).map_err(|err| format!("calendar_events_on_date failed: {err}"))?;
    let summary = session
        .service
        .day_summary(date)
        .map_err(|err| format!("calendar_events_on_date failed: {err}"))?;

    let items = summary
        .events
        .iter()
        .map(|event| to_event_item(event, summary.conflicts.involves(event.id())))
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No events scheduled.".to_string()
    } else {
        format!("{} event(s).", items.len())
    };

    Ok(EventListResponse {
        ok: true,
        message,
        date: iso_date(date),
        heading: day_heading(date),
        items,
        has_conflicts: summary.has_conflicts(),
    })
}

fn add_event<C: Clock>(
    session: &mut Session<C>,
    draft: &EventDraft,
) -> Result<EventActionResponse, String> {
    let event = session
        .service
        .add_event(draft)
        .map_err(|err| format!("calendar_add_event failed: {err}"))?;
    Ok(EventActionResponse::success(
        "Event added.",
        Some(event.id().to_string()),
        1,
    ))
}

fn to_event_item(event: &Event, in_conflict: bool) -> EventItem {
    let style = DefaultEventStyles.style_for(event.kind());
    EventItem {
        event_id: event.id().to_string(),
        title: event.title().to_string(),
        date: iso_date(event.date()),
        time: event.time().format("%H:%M").to_string(),
        time_label: format_time(event.time()),
        range_label: format_interval(event.time(), event.duration_minutes()),
        duration_minutes: event.duration_minutes(),
        kind: event.kind().as_str().to_string(),
        kind_label: event_type_label(event.kind()).to_string(),
        icon: style.icon,
        accent: style.accent,
        text_color: style.text,
        background: style.background,
        location: event.location().map(str::to_string),
        description: event.description().map(str::to_string),
        in_conflict,
    }
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
