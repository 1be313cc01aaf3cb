mod common;
use common::{brw, init_db_with_data, setup_test_db, temp_out};
use predicates::str::contains;
use serde_json::Value;
use std::fs;

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    brw()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,timestamp,shift,extraction_weight,extraction_time,grind_time"));
    assert!(content.contains("2024-01-15 09:00"));
    assert!(content.contains("2024-01-16 16:30"));
    assert!(content.contains("18.5"));
    assert!(content.contains("36.2"));

    // newest first, same order as the list view
    let pos_new = content.find("2024-01-16 16:30").expect("newest row");
    let pos_old = content.find("2024-01-15 09:00").expect("oldest row");
    assert!(pos_new < pos_old);
}

#[test]
fn test_export_json_all_structure() {
    let db_path = setup_test_db("export_json_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_all", "json");

    brw()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: Value = serde_json::from_str(&content).expect("valid json");
    let arr = v.as_array().expect("array");
    assert_eq!(arr.len(), 2);

    // newest first
    assert_eq!(arr[0]["timestamp"], "2024-01-16 16:30");
    assert_eq!(arr[0]["shift"], "PM");
    assert_eq!(arr[0]["extraction_weight"], 36.2);
    assert_eq!(arr[1]["shift"], "AM");

    for key in [
        "id",
        "timestamp",
        "shift",
        "extraction_weight",
        "extraction_time",
        "grind_time",
    ] {
        assert!(arr[0].get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn test_export_respects_window() {
    let db_path = setup_test_db("export_window");
    init_db_with_data(&db_path);

    let out = temp_out("export_window", "csv");

    brw()
        .args([
            "--db",
            &db_path,
            "--now",
            "2024-01-15 10:00",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--window",
            "today",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2024-01-15 09:00"));
    assert!(!content.contains("2024-01-16 16:30"));
}

#[test]
fn test_export_empty_window_creates_no_file() {
    let db_path = setup_test_db("export_empty_window");
    init_db_with_data(&db_path);

    let out = temp_out("export_empty_window", "csv");

    // a day with no brews at all
    brw()
        .args([
            "--db",
            &db_path,
            "--now",
            "2024-03-01 10:00",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--window",
            "today",
        ])
        .assert()
        .success()
        .stdout(contains("No brews found for the selected window."));

    assert!(!std::path::Path::new(&out).exists());
}
