#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn brw() -> Command {
    cargo_bin_cmd!("brewlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_brewlogger.sqlite", name));
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

/// Create the schema without touching the user config
pub fn init_test_db(db_path: &str) {
    brw()
        .args(["--db", db_path, "--test", "init"]) // uses --test init to create schema
        .assert()
        .success();
}

/// Log one brew at a pinned local instant ("YYYY-MM-DD HH:MM")
pub fn add_brew_at(db_path: &str, now: &str, weight: &str, time: &str, grind: &str) {
    brw()
        .args(["--db", db_path, "--now", now, "add", weight, time, grind])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests:
/// one AM brew and one PM brew on consecutive days
pub fn init_db_with_data(db_path: &str) {
    init_test_db(db_path);

    add_brew_at(db_path, "2024-01-15 09:00", "18.5", "28", "12");
    add_brew_at(db_path, "2024-01-16 16:30", "36.2", "31.5", "14");
}

/// Helper to populate many brews directly via the library API for performance tests
pub fn populate_many_brews(db_path: &str, n: usize) {
    use brewlogger::db::store::{BrewStore, SqliteStore};
    use brewlogger::models::brew::NewBrew;
    use chrono::{Duration, Local, TimeZone};

    let mut store = SqliteStore::create(db_path).expect("create db");

    let start = Local
        .with_ymd_and_hms(2024, 1, 1, 8, 0, 0)
        .single()
        .expect("valid local instant");

    for i in 0..n {
        // spread the timestamps over a few months
        let ts = start + Duration::hours(3 * i as i64);
        let brew = NewBrew::logged_at(ts, 18.0 + (i % 5) as f64, 25.0 + (i % 10) as f64, 12.0);
        store.append(&brew).expect("append brew");
    }
}
