//! Integration tests for the `vital-calc` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn vital_calc() -> Command {
    let mut cmd = Command::cargo_bin("vital-calc").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// ── age ─────────────────────────────────────────────────────────────────────

#[test]
fn test_age_months() {
    vital_calc()
        .args(["age", "--start", "2024-01-01", "--end", "2024-03-15"])
        .assert()
        .success()
        .stdout("2 months\n");
}

#[test]
fn test_age_hours_from_timestamp() {
    vital_calc()
        .args(["age", "--start", "2024-01-01", "--end", "2024-01-01T12:00:00"])
        .assert()
        .success()
        .stdout("12 hours\n");
}

#[test]
fn test_age_years_before_anniversary() {
    vital_calc()
        .args(["age", "--start", "2020-06-15", "--end", "2024-06-10"])
        .assert()
        .success()
        .stdout("3 years\n");
}

#[test]
fn test_age_json() {
    let output = vital_calc()
        .args(["age", "--start", "2024-01-01", "--end", "2024-01-20", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["magnitude"], 19);
    assert_eq!(value["unit"], "days");
}

#[test]
fn test_age_reversed_prints_placeholder() {
    vital_calc()
        .args(["age", "--start", "2024-01-20", "--end", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter valid dates"));
}

#[test]
fn test_age_reversed_json_is_null() {
    vital_calc()
        .args(["--json", "age", "--start", "2024-01-20", "--end", "2024-01-01"])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_age_invalid_date_fails() {
    vital_calc()
        .args(["age", "--start", "2024-02-30", "--end", "2024-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --start date"));
}

// ── duration ────────────────────────────────────────────────────────────────

#[test]
fn test_duration_text() {
    vital_calc()
        .args(["duration", "--start", "2015-03-20", "--end", "2023-01-05"])
        .assert()
        .success()
        .stdout("7 years, 9 months, 16 days\n");
}

#[test]
fn test_duration_json() {
    let output = vital_calc()
        .args(["duration", "--start", "2015-03-20", "--end", "2023-01-05", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["years"], 7);
    assert_eq!(value["months"], 9);
    assert_eq!(value["days"], 16);
}

#[test]
fn test_duration_missing_end_is_usage_error() {
    vital_calc()
        .args(["duration", "--start", "2015-03-20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--end"));
}

// ── configuration ───────────────────────────────────────────────────────────

#[test]
fn test_config_file_changes_month_size() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[policy]\ndays_per_month = 31").unwrap();

    // 62 elapsed days: 2 months of 31 days
    vital_calc()
        .arg("--config")
        .arg(file.path())
        .args(["age", "--start", "2024-01-01", "--end", "2024-03-03"])
        .assert()
        .success()
        .stdout("2 months\n");
}

#[test]
fn test_env_overrides_policy() {
    // 60 elapsed days: 1 month of 31 days instead of 2 of 30
    vital_calc()
        .env("VITAL_CALC_POLICY__DAYS_PER_MONTH", "31")
        .args(["age", "--start", "2024-01-01", "--end", "2024-03-01"])
        .assert()
        .success()
        .stdout("1 month\n");
}

#[test]
fn test_config_output_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[output]\njson = true").unwrap();

    vital_calc()
        .arg("--config")
        .arg(file.path())
        .args(["age", "--start", "2024-01-20", "--end", "2024-01-01"])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_invalid_config_fails() {
    vital_calc()
        .env("VITAL_CALC_POLICY__DAYS_PER_MONTH", "0")
        .args(["age", "--start", "2024-01-01", "--end", "2024-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("days_per_month"));
}

#[test]
fn test_missing_config_file_fails() {
    vital_calc()
        .args(["--config", "/nonexistent/vital-calc.toml"])
        .args(["age", "--start", "2024-01-01", "--end", "2024-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
