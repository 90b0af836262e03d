#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use planner::core::{EventStore, ManualClock};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

pub fn planner() -> Command {
    cargo_bin_cmd!("planner")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_planner.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB through the CLI (test mode, no config file written)
pub fn init_db(db_path: &str) {
    planner()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn ts(s: &str) -> NaiveDateTime {
    planner::utils::parse_timestamp(s).expect("valid timestamp")
}

/// In-memory store driven by a manual clock the test keeps a handle to.
pub fn memory_store(now: &str) -> (EventStore, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new(ts(now)));
    let store = EventStore::open_in_memory(Box::new(clock.clone())).expect("open store");
    (store, clock)
}
