use chrono::NaiveDate;
use planner::core::{EventStore, HighlightIndex, SystemClock};
use rusqlite::Connection;
use std::fs;

/// Schema written by the first relational version of the planner.
const LEGACY_SCHEMA: &str = "
    CREATE TABLE events (
        id INTEGER NOT NULL,
        event_date DATETIME NOT NULL,
        description TEXT,
        PRIMARY KEY (id)
    );
    INSERT INTO events VALUES (1, '2020-02-20 09:00:00.000000', 'Standup');
    INSERT INTO events VALUES (5, '2020-02-20 14:30:12.500000', 'Review');
    INSERT INTO events VALUES (9, '2020-02-22 10:00:00.000000', NULL);
";

#[test]
fn legacy_table_is_rebuilt_with_a_backup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.sqlite");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(LEGACY_SCHEMA).unwrap();
    }

    let path_str = path.to_string_lossy().to_string();
    let mut store = EventStore::open(&path_str, Box::new(SystemClock)).unwrap();

    let events = store.list_all().unwrap();
    let rows: Vec<(i64, String, String)> = events
        .iter()
        .map(|e| (e.id, e.timestamp_str(), e.description.clone()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (1, "2020-02-20 09:00".into(), "Standup".into()),
            (5, "2020-02-20 14:30".into(), "Review".into()),
            (9, "2020-02-22 10:00".into(), "(untitled)".into()),
        ]
    );

    let backups: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|n| n.ends_with("-backup_db_pre_autoincrement.zip"))
        .collect();
    assert_eq!(backups.len(), 1);

    // new ids continue past the highest legacy id
    let next = store.add("2020-02-23 09:00", "After migration").unwrap();
    assert!(next.id > 9);

    let index = HighlightIndex::attach(&mut store).unwrap();
    assert_eq!(
        index
            .borrow()
            .count(NaiveDate::from_ymd_opt(2020, 2, 20).unwrap()),
        2
    );
}

#[test]
fn reopening_a_migrated_database_does_not_migrate_again() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.sqlite");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(LEGACY_SCHEMA).unwrap();
    }
    let path_str = path.to_string_lossy().to_string();

    drop(EventStore::open(&path_str, Box::new(SystemClock)).unwrap());
    let store = EventStore::open(&path_str, Box::new(SystemClock)).unwrap();
    assert_eq!(store.list_all().unwrap().len(), 3);

    let migrations = planner::db::log::load_log(&store.pool().conn)
        .unwrap()
        .into_iter()
        .filter(|l| l.operation == "migration_applied")
        .count();
    assert_eq!(migrations, 1);
}
