//! Integration tests for the hse-kpi binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn hse(data_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("hse-kpi");
    cmd.env("HSE_KPI_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn add_report(data_dir: &TempDir, week: &str, year: &str, project: &str, man_hours: &str) {
    hse(data_dir)
        .args(["report", "add", week, year, "--project", project])
        .args(["--man-hours", man_hours, "--recordable", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Submitted report rpt-"));
}

#[test]
fn test_week_dates() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .args(["week", "dates", "2", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 2 (Jan 03 - Jan 09, 2026)"))
        .stdout(predicate::str::contains("2026-01-03 (Saturday)"))
        .stdout(predicate::str::contains("2026-01-09 (Friday)"));
}

#[test]
fn test_week_dates_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .args(["week", "dates", "53", "2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 52"));
}

#[test]
fn test_week_of_date() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .args(["week", "of", "2026-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-W01"))
        .stdout(predicate::str::contains("Month: 2025-12"));
}

#[test]
fn test_week_of_overflow_day() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .args(["week", "of", "2022-12-28"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2022-W52"))
        .stdout(predicate::str::contains("counted in Week 52"));
}

#[test]
fn test_week_current_with_date() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .args(["week", "current", "--date", "2026-02-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-W06"));
}

#[test]
fn test_week_next_and_prev() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .args(["week", "next", "--date", "2026-02-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-W07"));

    hse(&dir)
        .args(["week", "prev", "--date", "2026-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-W52"));
}

#[test]
fn test_week_list() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .args(["week", "list", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fiscal year 2026: 2025-12-27 to 2026-12-25"))
        .stdout(predicate::str::contains("2026-W52"));
}

#[test]
fn test_month_key() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .args(["month-key", "2026-01-30", "2026-02-02"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2026-02\n"));

    // Inverted input is normalized
    hse(&dir)
        .args(["month-key", "2026-02-05", "2026-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2026-02\n"));
}

#[test]
fn test_month_key_invalid_date() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .args(["month-key", "2026-02-30", "2026-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_month_weeks() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .args(["month", "weeks", "2025-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("December 2025 (5 weeks)"))
        .stdout(predicate::str::contains("2025-W49"))
        .stdout(predicate::str::contains("2026-W01  2025-12-27 - 2026-01-02  (5 of 7 days)"));
}

#[test]
fn test_report_add_and_monthly() {
    let dir = TempDir::new().unwrap();
    add_report(&dir, "2", "2026", "Pipeline", "1000");
    add_report(&dir, "6", "2026", "Pipeline", "400");

    hse(&dir)
        .args(["report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-W02"))
        .stdout(predicate::str::contains("2 report(s)"));

    hse(&dir)
        .args(["report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-01"))
        .stdout(predicate::str::contains("2026-02"))
        .stdout(predicate::str::contains("TOTAL"));
}

#[test]
fn test_report_add_duplicate_fails() {
    let dir = TempDir::new().unwrap();
    add_report(&dir, "2", "2026", "Pipeline", "1000");

    hse(&dir)
        .args(["report", "add", "2", "2026", "--project", "pipeline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_report_delete() {
    let dir = TempDir::new().unwrap();
    let output = hse(&dir)
        .args(["report", "add", "2", "2026", "--project", "Pipeline"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let id = stdout
        .split_whitespace()
        .find(|word| word.starts_with("rpt-"))
        .unwrap()
        .to_string();

    hse(&dir)
        .args(["report", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted report"));

    hse(&dir)
        .args(["report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No weekly reports found."));
}

#[test]
fn test_report_import_and_monthly_json_export() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("weekly.csv");
    std::fs::write(
        &csv_path,
        "project,zone,week,year,man_hours,lost_time_injuries,recordable_injuries\n\
         Pipeline,North,1,2026,2000,1,1\n\
         Pipeline,North,2,2026,1000,0,0\n\
         Pipeline,North,60,2026,1000,0,0\n",
    )
    .unwrap();

    hse(&dir)
        .args(["report", "import"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 report(s)"))
        .stdout(predicate::str::contains("line 4:"));

    let json_path = dir.path().join("monthly.json");
    hse(&dir)
        .args(["report", "monthly", "--output"])
        .arg(&json_path)
        .assert()
        .success();

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    let rows = value["data"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["month"], "2025-12");
    assert_eq!(rows[0]["weeks"][0], "2026-W01");
    assert_eq!(rows[1]["month"], "2026-01");
}

#[test]
fn test_report_export_csv_round_trip() {
    let dir = TempDir::new().unwrap();
    add_report(&dir, "10", "2026", "Terminal", "80");

    let csv_path = dir.path().join("weekly.csv");
    hse(&dir)
        .args(["report", "export"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 report(s)"));

    let other = TempDir::new().unwrap();
    hse(&other)
        .args(["report", "import"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 report(s)"));
}

#[test]
fn test_init_and_config() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("weekly_reports.json").exists());

    hse(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      true"));
}

#[test]
fn test_report_monthly_last_month() {
    let dir = TempDir::new().unwrap();
    hse(&dir)
        .args(["report", "monthly", "--last-month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No weekly reports found."));

    hse(&dir)
        .args(["report", "monthly", "--last-month", "--from", "2026-01"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_date_format_setting_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    hse(&dir)
        .args(["week", "dates", "2", "2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"));
}
