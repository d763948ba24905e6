use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, init_db_with_workspace, rti, setup_test_db, temp_dir};

#[test]
fn test_export_writes_hours_and_notes() {
    let db_path = setup_test_db("export_hours_notes");
    init_db_with_data(&db_path);
    let out = temp_dir("export_hours_notes");
    let out_str = out.to_string_lossy().to_string();

    rti()
        .args(["--db", &db_path, "export", "--dir", &out_str, "--force"])
        .assert()
        .success()
        .stdout(contains("Hours export completed"))
        .stdout(contains("Notes export completed"));

    let hours = fs::read_to_string(out.join("acme_hours.csv")).expect("read hours csv");
    let lines: Vec<&str> = hours.lines().collect();

    assert_eq!(lines[0], "\"date\",\"time\"");
    assert_eq!(lines[1], "\"2025-10-01\",\"09:00:00\"");
    assert_eq!(lines[4], "\"2025-10-01\",\"17:30:00\"");
    assert_eq!(lines.last(), Some(&"\"2025-10-03\",\"08:30:00\""));
    // 4 + 2 + 1 punches plus the header
    assert_eq!(lines.len(), 8);

    let notes = fs::read_to_string(out.join("acme_notes.csv")).expect("read notes csv");
    assert!(notes.starts_with("\"date\",\"time_spent\",\"note\""));
    assert!(notes.contains("\"2025-10-01\",\"01:30\",\"deploy fix for the billing service\""));
}

#[test]
fn test_export_empty_workspace_writes_headers_only() {
    let db_path = setup_test_db("export_empty");
    init_db_with_workspace(&db_path);
    let out = temp_dir("export_empty");
    let out_str = out.to_string_lossy().to_string();

    rti()
        .args(["--db", &db_path, "export", "--dir", &out_str])
        .assert()
        .success()
        .stdout(contains("No workdays found"));

    let hours = fs::read_to_string(out.join("acme_hours.csv")).expect("read hours csv");
    assert_eq!(hours.trim_end(), "\"date\",\"time\"");

    let notes = fs::read_to_string(out.join("acme_notes.csv")).expect("read notes csv");
    assert_eq!(notes.trim_end(), "\"date\",\"time_spent\",\"note\"");
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let db_path = setup_test_db("export_no_overwrite");
    init_db_with_data(&db_path);
    let out = temp_dir("export_no_overwrite");
    let out_str = out.to_string_lossy().to_string();

    fs::write(out.join("acme_hours.csv"), "keep me\n").expect("seed file");

    rti()
        .args(["--db", &db_path, "export", "--dir", &out_str])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    let kept = fs::read_to_string(out.join("acme_hours.csv")).expect("read seeded file");
    assert_eq!(kept, "keep me\n");

    rti()
        .args(["--db", &db_path, "export", "--dir", &out_str])
        .write_stdin("y\ny\n")
        .assert()
        .success();

    let replaced = fs::read_to_string(out.join("acme_hours.csv")).expect("read hours csv");
    assert!(replaced.contains("\"2025-10-02\",\"17:00:00\""));
}

#[test]
fn test_export_uses_workspace_date_format() {
    let db_path = setup_test_db("export_date_format");
    let out = temp_dir("export_date_format");
    let out_str = out.to_string_lossy().to_string();

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "workspace", "euro", "--date-format", "%d/%m/%Y"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "mark", "--date", "2025-10-01", "--time", "09:00"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "export", "-w", "euro", "--dir", &out_str, "-f"])
        .assert()
        .success();

    let hours = fs::read_to_string(out.join("euro_hours.csv")).expect("read hours csv");
    assert!(hours.contains("\"01/10/2025\",\"09:00:00\""));
}

#[test]
fn test_import_appends_punches() {
    let db_path = setup_test_db("import_appends");
    init_db_with_workspace(&db_path);
    let dir = temp_dir("import_appends");
    let file = dir.join("punches.csv");

    fs::write(
        &file,
        "date,time\n2025-11-03,09:00\n2025-11-03,12:30\n2025-11-03, 13:30 \n2025-11-03,18:00\n",
    )
    .expect("write import csv");

    rti()
        .args(["--db", &db_path, "import", &file.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("Imported 4 punches into acme"));

    rti()
        .args(["--db", &db_path, "show", "--date", "2025-11-03"])
        .assert()
        .success()
        .stdout(contains("2025-11-03 (8:00:00/+0)"));
}

#[test]
fn test_import_rejects_file_with_bad_row() {
    let db_path = setup_test_db("import_bad_row");
    init_db_with_workspace(&db_path);
    let dir = temp_dir("import_bad_row");
    let file = dir.join("punches.csv");

    fs::write(&file, "date,time\n2025-11-04,09:00\n2025-11-04,99:00\n").expect("write csv");

    rti()
        .args(["--db", &db_path, "import", &file.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 99:00"));

    // nothing was written
    rti()
        .args(["--db", &db_path, "show", "--date", "2025-11-04"])
        .assert()
        .success()
        .stdout(contains("There are no workdays in the given range"));
}

#[test]
fn test_exported_hours_import_into_other_workspace() {
    let db_path = setup_test_db("export_then_import");
    init_db_with_data(&db_path);
    let out = temp_dir("export_then_import");
    let out_str = out.to_string_lossy().to_string();

    rti()
        .args(["--db", &db_path, "export", "--dir", &out_str, "-f"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "workspace", "copy", "--date-format", "%Y-%m-%d"])
        .assert()
        .success();

    rti()
        .args([
            "--db",
            &db_path,
            "import",
            &out.join("acme_hours.csv").to_string_lossy(),
            "-w",
            "copy",
        ])
        .assert()
        .success()
        .stdout(contains("Imported 7 punches into copy"));

    rti()
        .args(["--db", &db_path, "check", "-w", "copy"])
        .assert()
        .success()
        .stdout(contains("2025-10-03"))
        .stdout(contains("2025-10-01").not());
}
