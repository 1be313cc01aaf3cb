use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{add_brew_at, brw, init_db_with_data, init_test_db, temp_out};

/// Create a unique test DB path inside the system temp dir
fn setup_test_db(name: &str) -> String {
    // Cross-platform: /tmp su Linux/macOS, %TEMP% su Windows
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_brewlogger.sqlite", name));

    let db_path = path.to_string_lossy().to_string();

    // Rimuove il file se esiste già (reset)
    std::fs::remove_file(&db_path).ok();

    db_path
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    brw()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized at"))
        .stdout(contains("brewlogger initialization completed!"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_logs_brew_and_shows_view() {
    let db_path = setup_test_db("add_logs_brew");
    init_test_db(&db_path);

    // 09:00 -> AM shift, and the refreshed view opens on 'today'
    brw()
        .args([
            "--db",
            &db_path,
            "--now",
            "2024-01-15 09:00",
            "add",
            "18.5",
            "28",
            "12",
        ])
        .assert()
        .success()
        .stdout(contains("Brew #1 logged."))
        .stdout(contains("Today 09:00"))
        .stdout(contains("AM"))
        .stdout(contains("18.5"))
        .stdout(contains("Window: today | showing 1 of 1 brews"));
}

#[test]
fn test_list_orders_newest_first_with_relative_labels() {
    let db_path = setup_test_db("list_newest_first");
    init_test_db(&db_path);

    add_brew_at(&db_path, "2024-01-14 23:30", "17.0", "25", "11");
    add_brew_at(&db_path, "2024-01-15 09:00", "18.5", "28", "12");
    add_brew_at(&db_path, "2024-01-16 16:00", "36.2", "31.5", "14");

    let assert = brw()
        .args([
            "--db",
            &db_path,
            "--now",
            "2024-01-16 18:00",
            "list",
            "--window",
            "all",
        ])
        .assert()
        .success()
        .stdout(contains("Window: all | showing 3 of 3 brews"));

    let text = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let newest = text.find("Today 16:00").expect("today row");
    let middle = text.find("Yesterday 09:00").expect("yesterday row");
    let oldest = text.find("14/01/2024 23:30").expect("absolute row");

    assert!(newest < middle);
    assert!(middle < oldest);
}

#[test]
fn test_list_window_today_narrows_the_view() {
    let db_path = setup_test_db("list_window_today");
    init_test_db(&db_path);

    add_brew_at(&db_path, "2024-01-15 09:00", "18.5", "28", "12");
    add_brew_at(&db_path, "2024-01-16 16:00", "36.2", "31.5", "14");

    brw()
        .args([
            "--db",
            &db_path,
            "--now",
            "2024-01-16 18:00",
            "list",
            "--window",
            "today",
        ])
        .assert()
        .success()
        .stdout(contains("Today 16:00"))
        .stdout(contains("Yesterday 09:00").not())
        .stdout(contains("Window: today | showing 1 of 2 brews"));
}

#[test]
fn test_list_default_window_comes_from_config() {
    let db_path = setup_test_db("list_default_window");
    init_test_db(&db_path);

    add_brew_at(&db_path, "2024-01-15 09:00", "18.5", "28", "12");
    add_brew_at(&db_path, "2024-01-16 16:00", "36.2", "31.5", "14");

    // no --window: the built-in default opens on 'today'
    brw()
        .args(["--db", &db_path, "--now", "2024-01-16 18:00", "list"])
        .assert()
        .success()
        .stdout(contains("Window: today | showing 1 of 2 brews"))
        .stdout(contains("Yesterday 09:00").not());
}

#[test]
fn test_list_week_boundary_is_inclusive() {
    let db_path = setup_test_db("list_week_boundary");
    init_test_db(&db_path);

    // exactly seven days before "now" -> still inside the window
    add_brew_at(&db_path, "2024-01-08 10:00", "18.5", "28", "12");
    // one minute older -> out
    add_brew_at(&db_path, "2024-01-08 09:59", "17.0", "25", "11");

    brw()
        .args([
            "--db",
            &db_path,
            "--now",
            "2024-01-15 10:00",
            "list",
            "--window",
            "week",
        ])
        .assert()
        .success()
        .stdout(contains("08/01/2024 10:00"))
        .stdout(contains("08/01/2024 09:59").not())
        .stdout(contains("Window: week | showing 1 of 2 brews"));
}

#[test]
fn test_list_relative_labels_across_midnight() {
    let db_path = setup_test_db("list_across_midnight");
    init_test_db(&db_path);

    add_brew_at(&db_path, "2024-01-15 23:59", "18.5", "28", "12");

    // two minutes later it is another calendar day: Yesterday, not Today
    brw()
        .args([
            "--db",
            &db_path,
            "--now",
            "2024-01-16 00:01",
            "list",
            "--window",
            "all",
        ])
        .assert()
        .success()
        .stdout(contains("Yesterday 23:59"));

    brw()
        .args([
            "--db",
            &db_path,
            "--now",
            "2024-01-16 00:01",
            "list",
            "--window",
            "today",
        ])
        .assert()
        .success()
        .stdout(contains("No brews in the 'today' window."))
        .stdout(contains("Window: today | showing 0 of 1 brews"));
}

#[test]
fn test_list_empty_states() {
    let db_path = setup_test_db("list_empty_states");
    init_test_db(&db_path);

    brw()
        .args(["--db", &db_path, "list", "--window", "all"])
        .assert()
        .success()
        .stdout(contains("No brews logged yet."))
        .stdout(contains("Window: all | showing 0 of 0 brews"));

    brw()
        .args(["--db", &db_path, "list", "--window", "week"])
        .assert()
        .success()
        .stdout(contains("No brews in the 'week' window."));
}

#[test]
fn test_list_rejects_unknown_window() {
    let db_path = setup_test_db("list_unknown_window");
    init_test_db(&db_path);

    brw()
        .args(["--db", &db_path, "list", "--window", "month"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn test_add_rejects_non_numeric_measures() {
    let db_path = setup_test_db("add_non_numeric");
    init_test_db(&db_path);

    brw()
        .args(["--db", &db_path, "add", "abc", "28", "12"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn test_commands_require_init_first() {
    let db_path = setup_test_db("require_init");

    brw()
        .args(["--db", &db_path, "list"])
        .assert()
        .failure()
        .stderr(contains("run `brewlogger init` first"));

    brw()
        .args(["--db", &db_path, "add", "18.5", "28", "12"])
        .assert()
        .failure()
        .stderr(contains("run `brewlogger init` first"));
}

#[test]
fn test_add_failure_keeps_entered_values_and_no_phantom_row() {
    let db_path = setup_test_db("add_failure_no_phantom");
    init_test_db(&db_path);

    // Sabotage the schema: no shift value can satisfy the CHECK, so every
    // append is rejected by the store
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute_batch(
        "DROP TABLE brews;
         CREATE TABLE brews (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            extraction_weight REAL NOT NULL,
            extraction_time   REAL NOT NULL,
            grind_time        REAL NOT NULL,
            timestamp         TEXT NOT NULL,
            shift             TEXT NOT NULL CHECK (shift IN ('XX'))
         );",
    )
    .expect("sabotage schema");
    drop(conn);

    brw()
        .args([
            "--db",
            &db_path,
            "--now",
            "2024-01-15 09:00",
            "add",
            "18.5",
            "28",
            "12",
        ])
        .assert()
        .failure()
        .stderr(contains("Brew not saved"))
        .stdout(contains(
            "Entered values kept: weight 18.5 g, time 28 s, grind 12 s",
        ));

    // the rejected brew must not show up afterwards
    brw()
        .args(["--db", &db_path, "list", "--window", "all"])
        .assert()
        .success()
        .stdout(contains("No brews logged yet."));
}

#[test]
fn test_shift_badges_follow_wall_clock() {
    let db_path = setup_test_db("shift_badges");
    init_test_db(&db_path);

    add_brew_at(&db_path, "2024-01-10 07:00", "18.0", "27", "12"); // AM
    add_brew_at(&db_path, "2024-01-11 15:00", "18.0", "27", "12"); // PM
    add_brew_at(&db_path, "2024-01-12 23:00", "18.0", "27", "12"); // Night
    add_brew_at(&db_path, "2024-01-13 00:30", "18.0", "27", "12"); // Night

    let assert = brw()
        .args([
            "--db",
            &db_path,
            "--now",
            "2024-01-13 12:00",
            "list",
            "--window",
            "all",
        ])
        .assert()
        .success()
        .stdout(contains("Window: all | showing 4 of 4 brews"));

    let text = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    // one badge per row, nothing else in the view spells these out
    assert_eq!(text.matches("AM").count(), 1);
    assert_eq!(text.matches("PM").count(), 1);
    assert_eq!(text.matches("Night").count(), 2);
}

#[test]
fn test_db_info_check_vacuum() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_data(&db_path);

    brw()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total brews:"))
        .stdout(contains("Brews per shift:"))
        .stdout(contains("Date range:"));

    brw()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));

    brw()
        .args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed."));

    // no flags -> nothing happens, but politely
    brw()
        .args(["--db", &db_path, "db"])
        .assert()
        .success()
        .stdout(contains("Nothing to do"));
}

#[test]
fn test_internal_log_print_and_last() {
    let db_path = setup_test_db("internal_log");
    init_test_db(&db_path);
    add_brew_at(&db_path, "2024-01-15 09:00", "18.5", "28", "12");

    brw()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log:"))
        .stdout(contains("(brew #1)"))
        .stdout(contains("weight 18.5 g, time 28 s, grind 12 s"));

    // --last 1 keeps only the add entry, the init one is gone
    brw()
        .args(["--db", &db_path, "log", "--print", "--last", "1"])
        .assert()
        .success()
        .stdout(contains("(brew #1)"))
        .stdout(contains("Database initialized").not());
}

#[test]
fn test_config_print_and_check() {
    let db_path = setup_test_db("config_print_check");
    init_test_db(&db_path);

    brw()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration:"))
        .stdout(contains("default_window: today"))
        .stdout(contains("on_load_error: clear"));

    brw()
        .args(["--db", &db_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration looks good."));

    // a missing database is a warning, not an error
    let missing = setup_test_db("config_check_missing");
    brw()
        .args(["--db", &missing, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Database file does not exist yet"));
}

#[test]
fn test_config_check_flags_unknown_load_error_policy() {
    let db_path = setup_test_db("config_bad_policy");
    init_test_db(&db_path);

    // isolate the config dir and hand-write a config with a bad policy name
    let mut home: PathBuf = env::temp_dir();
    home.push("config_bad_policy_home");
    let conf_dir = home.join(".brewlogger");
    fs::create_dir_all(&conf_dir).expect("create config dir");
    fs::write(
        conf_dir.join("brewlogger.conf"),
        format!(
            "database: {}\ndefault_window: today\non_load_error: retry\n",
            db_path
        ),
    )
    .expect("write config");

    brw()
        .env("HOME", &home)
        .args(["--db", &db_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Unknown on_load_error 'retry': falling back to 'clear'"))
        .stdout(contains("Configuration looks good.").not());
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path);

    let out = temp_out("backup_plain", "sqlite");

    brw()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created:"));

    assert!(std::path::Path::new(&out).exists());

    let out2 = temp_out("backup_compressed", "sqlite");
    let zip_path = std::path::Path::new(&out2).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    brw()
        .args(["--db", &db_path, "backup", "--file", &out2, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed:"));

    // the plain copy is replaced by the archive
    assert!(zip_path.exists());
    assert!(!std::path::Path::new(&out2).exists());
}

#[test]
fn test_backup_compress_into_zip_named_destination() {
    let db_path = setup_test_db("backup_zip_dest");
    init_db_with_data(&db_path);

    // the destination already carries the archive extension
    let out = temp_out("backup_zip_dest", "zip");

    brw()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed:"));

    // the reported archive exists and wraps the full database copy
    let file = fs::File::open(&out).expect("open archive");
    let mut archive = zip::ZipArchive::new(file).expect("valid zip archive");
    assert_eq!(archive.len(), 1);

    let mut entry = archive.by_index(0).expect("archive entry");
    let mut header = [0u8; 16];
    std::io::Read::read_exact(&mut entry, &mut header).expect("read entry header");
    assert_eq!(&header[..15], b"SQLite format 3");
}

#[test]
fn test_backup_cancel_overwrite_keeps_file() {
    let db_path = setup_test_db("backup_cancel");
    init_db_with_data(&db_path);

    let out = temp_out("backup_cancel", "sqlite");
    fs::write(&out, "ORIGINAL").expect("create file");

    brw()
        .args(["--db", &db_path, "backup", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Backup cancelled."));

    let content = fs::read_to_string(&out).expect("read existing file");
    assert_eq!(content, "ORIGINAL");
}

#[test]
fn test_backup_missing_database_fails() {
    let db_path = setup_test_db("backup_missing_db");
    let out = temp_out("backup_missing_db", "sqlite");

    brw()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("database not found"));
}

#[test]
fn test_invalid_now_instant_fails() {
    let db_path = setup_test_db("invalid_now");
    init_test_db(&db_path);

    brw()
        .args(["--db", &db_path, "--now", "nonsense", "list"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: nonsense"));
}
