//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `monthcal_core` linkage.
//! - Print one month as a text grid, seeded with the sample events.
//!
//! Usage: `monthcal_cli [YYYY-MM]`. Without an argument the current month is
//! shown. `MONTHCAL_DB_PATH` switches the store to SQLite.

use monthcal_core::db::open_db;
use monthcal_core::schedule::labels::{day_heading, month_heading, WEEKDAY_LABELS};
use monthcal_core::{
    format_interval, init_logging_from_config, CalendarNavigator, CoreConfig, EventRepository,
    EventService, InMemoryEventRepository, MonthView, SampleSeed, SqliteEventRepository,
    SystemClock, YearMonth,
};
use std::process::ExitCode;

const CELL_WIDTH: usize = 7;

fn main() -> ExitCode {
    println!("monthcal_core ping={}", monthcal_core::ping());
    println!("monthcal_core version={}", monthcal_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = CoreConfig::from_env();
    init_logging_from_config(&config).map_err(|err| err.to_string())?;

    let month = match std::env::args().nth(1) {
        Some(raw) => parse_month_arg(&raw)?,
        None => CalendarNavigator::new(SystemClock).month(),
    };

    match config.db_path.as_deref() {
        Some(path) => {
            let conn = open_db(path).map_err(|err| err.to_string())?;
            let repo = SqliteEventRepository::try_new(&conn).map_err(|err| err.to_string())?;
            print_month(EventService::with_config(repo, &config), month)
        }
        None => print_month(
            EventService::with_config(InMemoryEventRepository::new(), &config),
            month,
        ),
    }
}

fn print_month<R: EventRepository>(
    mut service: EventService<R>,
    month: YearMonth,
) -> Result<(), String> {
    if service.event_count().map_err(|err| err.to_string())? == 0 {
        service
            .load_seed(&SampleSeed)
            .map_err(|err| err.to_string())?;
    }

    let view = service
        .month_view(month.year(), month.month0())
        .map_err(|err| err.to_string())?;
    println!();
    print!("{}", render_grid(&view));
    print_agenda(&view);
    Ok(())
}

/// `YYYY-MM` with a one-based month.
fn parse_month_arg(raw: &str) -> Result<YearMonth, String> {
    let invalid = || format!("expected YYYY-MM, got `{raw}`");
    let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    if month == 0 {
        return Err(invalid());
    }
    YearMonth::new(year, month - 1).map_err(|err| err.to_string())
}

/// Heading, weekday row and six week rows.
///
/// Padding days are bracketed; `/N` is the event count and `!` marks conflicts.
fn render_grid(view: &MonthView) -> String {
    let mut out = format!("{}\n", month_heading(view.month));
    for label in WEEKDAY_LABELS {
        out.push_str(&format!("{label:<width$}", width = CELL_WIDTH));
    }
    out.push('\n');

    for week in view.days.chunks(WEEKDAY_LABELS.len()) {
        for day in week {
            let mut cell = if day.cell.belongs_to_displayed_month() {
                format!("{:>2}", day.cell.day())
            } else {
                format!("[{}]", day.cell.day())
            };
            if !day.summary.events.is_empty() {
                cell.push_str(&format!("/{}", day.summary.events.len()));
            }
            if day.summary.has_conflicts() {
                cell.push('!');
            }
            out.push_str(&format!("{cell:<width$}", width = CELL_WIDTH));
        }
        out.push('\n');
    }
    out
}

fn print_agenda(view: &MonthView) {
    for day in view
        .days
        .iter()
        .filter(|day| day.cell.belongs_to_displayed_month() && !day.summary.events.is_empty())
    {
        println!();
        println!("{}", day_heading(day.cell.date()));
        for event in &day.summary.events {
            let marker = if day.summary.conflicts.involves(event.id()) {
                " (conflict)"
            } else {
                ""
            };
            println!(
                "  {}  {} [{}]{}",
                format_interval(event.time(), event.duration_minutes()),
                event.title(),
                event.kind().as_str(),
                marker
            );
        }
    }
}
