#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create an empty temporary directory for export/import files
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rclock_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Initialize the DB and create the `acme` workspace (8h, ISO dates), which
/// becomes the active one.
pub fn init_db_with_workspace(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args([
            "--db",
            db_path,
            "workspace",
            "acme",
            "--hours",
            "8",
            "--date-format",
            "%Y-%m-%d",
        ])
        .assert()
        .success();
}

/// Punch every time of `times` on `date` in the active workspace.
pub fn mark_day(db_path: &str, date: &str, times: &[&str]) {
    for t in times {
        rti()
            .args(["--db", db_path, "mark", "--date", date, "--time", t])
            .assert()
            .success();
    }
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db_with_workspace(db_path);

    mark_day(db_path, "2025-10-01", &["09:00", "12:00", "13:00", "17:30"]);
    mark_day(db_path, "2025-10-02", &["09:00", "17:00"]);
    mark_day(db_path, "2025-10-03", &["08:30"]);

    rti()
        .args([
            "--db",
            db_path,
            "comment",
            "deploy fix for the billing service",
            "--date",
            "2025-10-01",
            "--time",
            "01:30",
        ])
        .assert()
        .success();
}
