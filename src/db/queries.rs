use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::utils::time::{TIMESTAMP_FORMAT, format_timestamp};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_EVENTS: &str = "SELECT id, event_date, description FROM events";

pub fn map_row(row: &Row) -> Result<Event> {
    let raw: String = row.get("event_date")?;

    let timestamp = NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::validation(format!(
                "stored timestamp '{}' is not YYYY-MM-DD HH:MM",
                raw
            ))),
        )
    })?;

    Ok(Event {
        id: row.get("id")?,
        timestamp,
        description: row.get("description")?,
    })
}

fn collect_events(conn: &Connection, sql: &str, args: impl rusqlite::Params) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new row and return the id SQLite assigned to it.
pub fn insert_event(conn: &Connection, timestamp: &NaiveDateTime, description: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (event_date, description) VALUES (?1, ?2)",
        params![format_timestamp(timestamp), description],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update timestamp and description of an existing event.
/// Returns the number of rows touched (0 when the id is gone).
pub fn update_event(conn: &Connection, ev: &Event) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE events SET event_date = ?1, description = ?2 WHERE id = ?3",
        params![ev.timestamp_str(), ev.description, ev.id],
    )?;
    Ok(n)
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn find_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_EVENTS} WHERE id = ?1"))?;
    let ev = stmt.query_row([id], map_row).optional()?;
    Ok(ev)
}

/// Events with `start <= timestamp < end`, ordered by (timestamp, id).
pub fn load_events_between(
    conn: &Connection,
    start: &NaiveDateTime,
    end: &NaiveDateTime,
) -> AppResult<Vec<Event>> {
    collect_events(
        conn,
        &format!(
            "{SELECT_EVENTS}
             WHERE event_date >= ?1 AND event_date < ?2
             ORDER BY event_date ASC, id ASC"
        ),
        params![format_timestamp(start), format_timestamp(end)],
    )
}

/// Events with `timestamp >= start`, ordered by (timestamp, id).
pub fn load_events_from(conn: &Connection, start: &NaiveDateTime) -> AppResult<Vec<Event>> {
    collect_events(
        conn,
        &format!(
            "{SELECT_EVENTS}
             WHERE event_date >= ?1
             ORDER BY event_date ASC, id ASC"
        ),
        params![format_timestamp(start)],
    )
}

pub fn load_all_events(conn: &Connection) -> AppResult<Vec<Event>> {
    collect_events(
        conn,
        &format!("{SELECT_EVENTS} ORDER BY event_date ASC, id ASC"),
        [],
    )
}

pub fn count_events(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
}
