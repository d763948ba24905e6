use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, init_db_with_workspace, mark_day, rti, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized at"));

    assert!(std::path::Path::new(&db_path).exists());

    rti()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_first_workspace_becomes_active() {
    let db_path = setup_test_db("first_workspace_active");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "workspace", "acme", "--hours", "7"])
        .assert()
        .success()
        .stdout(contains("acme is now configured to work with 7 hours (created)"))
        .stdout(contains("acme is now active"));

    rti()
        .args(["--db", &db_path, "workspace", "beta"])
        .assert()
        .success()
        .stdout(contains("beta is now configured to work with 8 hours"))
        .stdout(contains("beta is now active").not());

    rti()
        .args(["--db", &db_path, "workspaces"])
        .assert()
        .success()
        .stdout(contains("acme"))
        .stdout(contains("beta"))
        .stdout(contains(" 7h"));
}

#[test]
fn test_workspace_update_keeps_existing_settings() {
    let db_path = setup_test_db("workspace_update");
    init_db_with_workspace(&db_path);

    rti()
        .args(["--db", &db_path, "workspace", "acme", "--hours", "6"])
        .assert()
        .success()
        .stdout(contains("6 hours (updated)"));

    mark_day(&db_path, "2025-10-01", &["09:00", "15:00"]);

    // date format set at creation is still in place
    rti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("2025-10-01 (6:00:00/+0)"));
}

#[test]
fn test_workspace_new_conflicts_with_existing() {
    let db_path = setup_test_db("workspace_new_conflict");
    init_db_with_workspace(&db_path);

    rti()
        .args(["--db", &db_path, "workspace", "acme", "--new"])
        .assert()
        .failure()
        .stderr(contains("A workspace named 'acme' already exists"));
}

#[test]
fn test_workspace_rejects_zero_hours() {
    let db_path = setup_test_db("workspace_zero_hours");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "workspace", "acme", "--hours", "0"])
        .assert()
        .failure()
        .stderr(contains("--hours must be greater than zero"));
}

#[test]
fn test_activate_switches_default_workspace() {
    let db_path = setup_test_db("activate_switch");
    init_db_with_workspace(&db_path);

    rti()
        .args(["--db", &db_path, "workspace", "beta"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "activate", "beta"])
        .assert()
        .success()
        .stdout(contains("beta is now active"));

    rti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Workspace: beta"))
        .stdout(contains("There are no workdays in the given range"));

    rti()
        .args(["--db", &db_path, "activate", "nope"])
        .assert()
        .failure()
        .stderr(contains("There is no workspace with the given name: nope"));
}

#[test]
fn test_mark_without_active_workspace_fails() {
    let db_path = setup_test_db("mark_no_active");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "mark", "--time", "09:00"])
        .assert()
        .failure()
        .stderr(contains("There is no workspace active, please activate one"));
}

#[test]
fn test_mark_reports_punch_count() {
    let db_path = setup_test_db("mark_punch_count");
    init_db_with_workspace(&db_path);

    rti()
        .args(["--db", &db_path, "mark", "--date", "2025-10-01", "--time", "0900"])
        .assert()
        .success()
        .stdout(contains("Marked 09:00:00 on 2025-10-01 [acme] (1 punches that day)"));

    rti()
        .args(["--db", &db_path, "mark", "--date", "2025-10-01", "--time", "17:00:30"])
        .assert()
        .success()
        .stdout(contains("Marked 17:00:30 on 2025-10-01 [acme] (2 punches that day)"));
}

#[test]
fn test_mark_rejects_invalid_time_and_date() {
    let db_path = setup_test_db("mark_invalid_input");
    init_db_with_workspace(&db_path);

    rti()
        .args(["--db", &db_path, "mark", "--time", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 25:00"));

    rti()
        .args(["--db", &db_path, "mark", "--time", "9am"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    rti()
        .args(["--db", &db_path, "mark", "--date", "01.10.2025", "--time", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 01.10.2025"));
}

#[test]
fn test_mark_accepts_workspace_date_format() {
    let db_path = setup_test_db("mark_workspace_format");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "workspace", "euro", "--date-format", "%d/%m/%Y"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "mark", "--date", "01/10/2025", "--time", "09:00"])
        .assert()
        .success()
        .stdout(contains("on 01/10/2025 [euro]"));

    // ISO is always accepted as a fallback
    rti()
        .args(["--db", &db_path, "mark", "--date", "2025-10-01", "--time", "17:00"])
        .assert()
        .success()
        .stdout(contains("(2 punches that day)"));

    rti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("01/10/2025 (8:00:00/+0)"));
}

#[test]
fn test_show_day_and_month_totals() {
    let db_path = setup_test_db("show_totals");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Workspace: acme"))
        .stdout(contains("October 2025"))
        .stdout(contains("2025-10-01 (7:30:00/"))
        .stdout(contains("-0:30:00"))
        .stdout(contains("2025-10-02 (8:00:00/+0)"))
        .stdout(contains("2025-10-03 (0:00:00/"))
        .stdout(contains("October total:15:30:00 ("))
        .stdout(contains("-8:30:00"));
}

#[test]
fn test_show_verbose_lists_sessions() {
    let db_path = setup_test_db("show_verbose");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "show", "-v"])
        .assert()
        .success()
        .stdout(contains("09:00:00  -  12:00:00 (3:00:00)"))
        .stdout(contains("13:00:00  -  17:30:00 (4:30:00)"))
        .stdout(contains("08:30:00  -  "))
        .stdout(contains("**:**:**"));
}

#[test]
fn test_show_comments() {
    let db_path = setup_test_db("show_comments");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("deploy fix").not());

    rti()
        .args(["--db", &db_path, "show", "-c"])
        .assert()
        .success()
        .stdout(contains("01:30 deploy fix for the billing service"));
}

#[test]
fn test_show_single_date() {
    let db_path = setup_test_db("show_single_date");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "show", "--date", "2025-10-02"])
        .assert()
        .success()
        .stdout(contains("2025-10-02 (8:00:00/+0)"))
        .stdout(contains("2025-10-01").not())
        .stdout(contains("October total:8:00:00 (+0)"));
}

#[test]
fn test_show_missing_date_does_not_create_day() {
    let db_path = setup_test_db("show_missing_date");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "show", "--date", "2020-01-01"])
        .assert()
        .success()
        .stdout(contains("There are no workdays in the given range"));

    rti()
        .args(["--db", &db_path, "show", "--json"])
        .assert()
        .success()
        .stdout(contains("2020-01-01").not());
}

#[test]
fn test_show_months_and_date_conflict() {
    let db_path = setup_test_db("show_months_date_conflict");
    init_db_with_data(&db_path);

    rti()
        .args([
            "--db",
            &db_path,
            "show",
            "--months",
            "2",
            "--date",
            "2025-10-01",
        ])
        .assert()
        .failure();

    rti()
        .args(["--db", &db_path, "show", "--months", "0"])
        .assert()
        .failure()
        .stderr(contains("--months must be greater than zero"));
}

#[test]
fn test_huge_months_window_is_an_error() {
    let db_path = setup_test_db("huge_months_window");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "show", "--months", "4000000"])
        .assert()
        .failure()
        .stderr(contains("Error: Invalid argument: --months 4000000"))
        .stderr(contains("panicked").not());

    rti()
        .args(["--db", &db_path, "export", "--months", "4294967295", "-f"])
        .assert()
        .failure()
        .stderr(contains("reaches before the earliest supported date"));
}

#[test]
fn test_show_json() {
    let db_path = setup_test_db("show_json");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "show", "--json"])
        .assert()
        .success()
        .stdout(contains("\"workspace\": \"acme\""))
        .stdout(contains("\"total\": \"7:30:00\""))
        .stdout(contains("\"delta\": \"-0:30:00\""))
        .stdout(contains("\"state\": \"open\""))
        .stdout(contains("\"days_count\": 3"))
        .stdout(contains("\"goal\": \"24:00:00\""));
}

#[test]
fn test_show_unknown_workspace() {
    let db_path = setup_test_db("show_unknown_workspace");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "show", "-w", "nope"])
        .assert()
        .failure()
        .stderr(contains("There is no workspace with the given name: nope"));
}

#[test]
fn test_check_lists_odd_days() {
    let db_path = setup_test_db("check_odd_days");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "check"])
        .assert()
        .success()
        .stdout(contains("The following days have an odd number of marks"))
        .stdout(contains("2025-10-03"))
        .stdout(contains("2025-10-01").not())
        .stdout(contains("2025-10-02").not());

    mark_day(&db_path, "2025-10-03", &["17:00"]);

    rti()
        .args(["--db", &db_path, "check"])
        .assert()
        .success()
        .stdout(contains("There are no missing marks"));
}

#[test]
fn test_lookup_comments() {
    let db_path = setup_test_db("lookup_comments");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "comment", "standup", "--date", "2025-10-02"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "lookup", "DEPLOY"])
        .assert()
        .success()
        .stdout(contains("2025-10-01"))
        .stdout(contains("01:30 deploy fix for the billing service"))
        .stdout(contains("standup").not());

    rti()
        .args(["--db", &db_path, "lookup", "stand*"])
        .assert()
        .success()
        .stdout(contains("2025-10-02"))
        .stdout(contains("--:-- standup"));

    rti()
        .args(["--db", &db_path, "lookup", "rollback"])
        .assert()
        .success()
        .stdout(contains("No comments found"));
}

#[test]
fn test_comment_creates_day_without_punches() {
    let db_path = setup_test_db("comment_only_day");
    init_db_with_workspace(&db_path);

    rti()
        .args([
            "--db",
            &db_path,
            "comment",
            "planning notes",
            "--date",
            "2025-09-15",
        ])
        .assert()
        .success()
        .stdout(contains("Comment added to 2025-09-15 [acme]"));

    rti()
        .args(["--db", &db_path, "check"])
        .assert()
        .success()
        .stdout(contains("There are no missing marks"));

    rti()
        .args(["--db", &db_path, "show", "-c"])
        .assert()
        .success()
        .stdout(contains("September 2025"))
        .stdout(contains("--:-- planning notes"))
        .stdout(contains("September total:0:00:00 (+0)"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("migration_applied"))
        .stdout(contains("(acme)"))
        .stdout(contains("=> 2025-10-01 09:00:00"));
}

#[test]
fn test_db_info_and_migrate() {
    let db_path = setup_test_db("db_info_migrate");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Punches:"))
        .stdout(contains("2025-10-01"))
        .stdout(contains("2025-10-03"))
        .stdout(contains("Active workspace:"))
        .stdout(contains("acme"));

    rti()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("20250302_0003_single_active_workspace"))
        .stdout(contains("Migration applied").not());
}

#[test]
fn test_config_print() {
    let db_path = setup_test_db("config_print");

    rti()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_hours:"))
        .stdout(contains("comment_width:"))
        .stdout(contains(db_path.as_str()));
}
