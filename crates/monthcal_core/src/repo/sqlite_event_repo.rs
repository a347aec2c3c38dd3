//! SQLite-backed event store adapter.
//!
//! # Responsibility
//! - Persist events beyond process lifetime behind `EventRepository`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Only migrated connections are accepted (`try_new` checks `user_version`).
//! - Read paths reject invalid persisted rows instead of masking them.
//! - Tie ordering follows the `seq` insertion column.
//! - Batch inserts run in one transaction.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::event::{Event, EventId, EventType};
use crate::repo::event_repo::{EventRepository, RepoError, RepoResult};
use chrono::{NaiveDate, NaiveTime};
use log::warn;
use rusqlite::{params, Connection, ErrorCode, Row};
use uuid::Uuid;

const EVENT_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    event_date,
    start_time,
    duration_minutes,
    event_type,
    location,
    description
FROM events";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// SQLite event repository borrowing an open, migrated connection.
pub struct SqliteEventRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    /// Wraps `conn` after checking its schema is at the latest version.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let db_version = current_user_version(conn)?;
        let latest = latest_version();
        if db_version > latest {
            return Err(DbError::UnsupportedSchemaVersion {
                db_version,
                latest_supported: latest,
            }
            .into());
        }
        if db_version < latest {
            return Err(DbError::SchemaNotMigrated {
                db_version,
                required: latest,
            }
            .into());
        }
        Ok(Self { conn })
    }

    fn query_events(&self, sql: &str, params: impl rusqlite::Params) -> RepoResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut events = Vec::new();
        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }
        Ok(events)
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn insert_event(&mut self, event: &Event) -> RepoResult<()> {
        insert_row(self.conn, event)
    }

    fn insert_events(&mut self, events: &[Event]) -> RepoResult<()> {
        // Dropping `tx` without commit rolls the batch back.
        let tx = self.conn.unchecked_transaction()?;
        for event in events {
            insert_row(&tx, event)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>> {
        let mut events = self.query_events(
            &format!("{EVENT_SELECT_SQL} WHERE uuid = ?1;"),
            params![id.to_string()],
        )?;
        Ok(events.pop())
    }

    fn events_on_date(&self, date: NaiveDate) -> RepoResult<Vec<Event>> {
        self.query_events(
            &format!("{EVENT_SELECT_SQL} WHERE event_date = ?1 ORDER BY start_time ASC, seq ASC;"),
            params![date.format(DATE_FORMAT).to_string()],
        )
    }

    fn events_between(&self, from: NaiveDate, to: NaiveDate) -> RepoResult<Vec<Event>> {
        self.query_events(
            &format!(
                "{EVENT_SELECT_SQL}
                 WHERE event_date >= ?1 AND event_date <= ?2
                 ORDER BY event_date ASC, start_time ASC, seq ASC;"
            ),
            params![
                from.format(DATE_FORMAT).to_string(),
                to.format(DATE_FORMAT).to_string()
            ],
        )
    }

    fn list_events(&self) -> RepoResult<Vec<Event>> {
        self.query_events(&format!("{EVENT_SELECT_SQL} ORDER BY seq ASC;"), [])
    }

    fn count_events(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM events;", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|_| RepoError::InvalidData(format!("row count {count}")))
    }
}

fn insert_row(conn: &Connection, event: &Event) -> RepoResult<()> {
    let result = conn.execute(
        "INSERT INTO events (
            uuid,
            title,
            event_date,
            start_time,
            duration_minutes,
            event_type,
            location,
            description
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
        params![
            event.id().to_string(),
            event.title(),
            event.date().format(DATE_FORMAT).to_string(),
            event.time().format(TIME_FORMAT).to_string(),
            event.duration_minutes(),
            event.kind().as_str(),
            event.location(),
            event.description(),
        ],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == ErrorCode::ConstraintViolation =>
        {
            warn!(
                "event=event_insert module=repo status=error error_code=duplicate_id event_id={}",
                event.id()
            );
            Err(RepoError::DuplicateId(event.id()))
        }
        Err(err) => Err(err.into()),
    }
}

fn parse_event_row(row: &Row<'_>) -> RepoResult<Event> {
    let raw_id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let raw_date: String = row.get(2)?;
    let raw_time: String = row.get(3)?;
    let raw_duration: i64 = row.get(4)?;
    let raw_type: String = row.get(5)?;

    let id = Uuid::parse_str(&raw_id)
        .map_err(|err| RepoError::InvalidData(format!("invalid uuid `{raw_id}`: {err}")))?;
    if title.trim().is_empty() {
        return Err(RepoError::InvalidData(format!("empty title for {id}")));
    }
    let date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT)
        .map_err(|err| RepoError::InvalidData(format!("invalid date `{raw_date}`: {err}")))?;
    let time = NaiveTime::parse_from_str(&raw_time, TIME_FORMAT)
        .map_err(|err| RepoError::InvalidData(format!("invalid time `{raw_time}`: {err}")))?;
    let duration_minutes = u32::try_from(raw_duration)
        .ok()
        .filter(|minutes| *minutes > 0)
        .ok_or_else(|| RepoError::InvalidData(format!("invalid duration {raw_duration}")))?;

    Ok(Event {
        id,
        title,
        date,
        time,
        duration_minutes,
        kind: EventType::parse(&raw_type),
        location: row.get(6)?,
        description: row.get(7)?,
    })
}
