use crate::db::pool::DbPool;
use crate::db::queries::count_events;
use crate::errors::AppResult;
use ansi_term::Colour::{Cyan, Green, Yellow};
use ansi_term::Style;
use rusqlite::OptionalExtension;
use std::fs;

/// Aggregate figures about the events table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbStats {
    pub total_events: i64,
    pub distinct_days: i64,
    pub first: Option<String>,
    pub last: Option<String>,
}

pub fn collect_stats(pool: &DbPool) -> AppResult<DbStats> {
    let total_events = count_events(&pool.conn)?;

    let distinct_days: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT substr(event_date, 1, 10)) FROM events",
        [],
        |row| row.get(0),
    )?;

    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT event_date FROM events ORDER BY event_date ASC, id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT event_date FROM events ORDER BY event_date DESC, id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbStats {
        total_events,
        distinct_days,
        first,
        last,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let stats = collect_stats(pool)?;
    let label = Cyan.bold();
    let dim = Style::new().dimmed();

    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{} {}", label.paint("• File:"), Yellow.paint(db_path));
    println!("{} {:.1} KB", label.paint("• Size:"), file_kb);
    println!(
        "{} {}",
        label.paint("• Total events:"),
        Green.paint(stats.total_events.to_string())
    );
    println!(
        "{} {}",
        label.paint("• Days with events:"),
        Green.paint(stats.distinct_days.to_string())
    );

    let none = dim.paint("--").to_string();
    println!("{}", label.paint("• Range:"));
    println!("    from: {}", stats.first.clone().unwrap_or_else(|| none.clone()));
    println!("    to:   {}", stats.last.clone().unwrap_or(none));

    if stats.distinct_days > 0 {
        let avg = stats.total_events as f64 / stats.distinct_days as f64;
        println!("{} {:.2}", label.paint("• Average events/day:"), avg);
    }

    println!();
    Ok(())
}
