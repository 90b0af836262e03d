use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::time::{format_timestamp, truncate_to_minute};
use chrono::NaiveDateTime;
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, params};

/// Marker stored in `log.target` once the legacy table has been rebuilt.
const LEGACY_REBUILD_VERSION: &str = "20240601_0001_events_autoincrement";

/// Replacement text for legacy rows saved with an empty description.
const UNTITLED: &str = "(untitled)";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// SQL used to create `events`, if the table exists.
fn events_table_sql(conn: &Connection) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        "SELECT sql FROM sqlite_master WHERE type='table' AND name='events'",
        [],
        |row| row.get(0),
    )
    .optional()
}

/// Create the `events` table with the canonical schema.
fn create_events_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            event_date  TEXT NOT NULL,
            description TEXT NOT NULL CHECK(length(trim(description)) > 0)
        );

        CREATE INDEX IF NOT EXISTS idx_events_date ON events(event_date, id);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM log
             WHERE operation = 'migration_applied' AND target = ?1
             LIMIT 1",
            [version],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Parse timestamps written by the original application
/// (`YYYY-MM-DD HH:MM:SS[.ffffff]`) or already canonical ones.
fn parse_legacy_timestamp(raw: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
        .map(truncate_to_minute)
}

/// Rebuild an `events` table created without AUTOINCREMENT into the
/// canonical schema, keeping ids and normalizing timestamps to minutes.
fn migrate_legacy_events_table(conn: &Connection) -> AppResult<()> {
    warning("Legacy events table detected, rebuilding with the current schema...");

    let tx = conn.unchecked_transaction()?;

    tx.execute_batch("ALTER TABLE events RENAME TO events_legacy;")?;
    create_events_table(&tx)?;

    let rows: Vec<(i64, String, Option<String>)> = {
        let mut stmt =
            tx.prepare("SELECT id, event_date, description FROM events_legacy ORDER BY id ASC")?;
        let mapped = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;
        mapped.collect::<rusqlite::Result<_>>()?
    };

    let mut untitled = 0usize;
    for (id, raw_date, description) in &rows {
        let ts = parse_legacy_timestamp(raw_date).ok_or_else(|| {
            AppError::Migration(format!(
                "event #{} has an unreadable timestamp '{}'",
                id, raw_date
            ))
        })?;

        let description = match description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => {
                untitled += 1;
                UNTITLED.to_string()
            }
        };

        tx.execute(
            "INSERT INTO events (id, event_date, description) VALUES (?1, ?2, ?3)",
            params![id, format_timestamp(&ts), description],
        )?;
    }

    tx.execute_batch("DROP TABLE events_legacy;")?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![
            LEGACY_REBUILD_VERSION,
            format!(
                "Rebuilt events table ({} rows, {} untitled)",
                rows.len(),
                untitled
            )
        ],
    )?;

    tx.commit()?;

    success(format!(
        "Migration applied: {} → {} events carried over",
        LEGACY_REBUILD_VERSION,
        rows.len()
    ));
    Ok(())
}

fn backup_before_migration(db_path: &str) -> AppResult<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::Path;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_autoincrement.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let backup_path = Path::new(db_path)
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&backup_name);

    let file = File::create(&backup_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| AppError::Migration(format!("backup failed (start_file): {}", e)))?;

    let db_content = fs::read(db_path)?;
    zip.write_all(&db_content)?;

    zip.finish()
        .map_err(|e| AppError::Migration(format!("backup failed (finish): {}", e)))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()` whenever a store is opened.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    match events_table_sql(conn)? {
        None => {
            create_events_table(conn)?;
            info!("created events table");
        }
        Some(sql) if !sql.to_uppercase().contains("AUTOINCREMENT") => {
            if migration_applied(conn, LEGACY_REBUILD_VERSION)? {
                return Err(AppError::Migration(
                    "events table lost its AUTOINCREMENT key after migration".to_string(),
                ));
            }

            let db_path: String = conn
                .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
                .unwrap_or_default();

            if !db_path.is_empty() {
                backup_before_migration(&db_path)?;
            } else {
                warning("Could not determine DB path, backup skipped.");
            }

            migrate_legacy_events_table(conn)?;
        }
        Some(_) => {
            conn.execute_batch(
                "CREATE INDEX IF NOT EXISTS idx_events_date ON events(event_date, id);",
            )?;
            debug!("events schema up to date");
        }
    }

    Ok(())
}
