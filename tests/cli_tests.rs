//! CLI integration tests for the resumen binary.

#![allow(clippy::unwrap_used)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a resumen command rooted in a scratch directory.
fn resumen_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("resumen").expect("Failed to find resumen binary");
    cmd.current_dir(dir.path());
    cmd
}

/// Writes a fixture file into the scratch directory.
fn write_fixture(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

// ═══════════════════════════════════════════════════════════════════
// Argument Surface Tests
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    resumen_in(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("resumen"));
}

#[test]
fn test_cli_help_lists_flags() {
    let dir = TempDir::new().unwrap();
    resumen_in(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--value-column"))
        .stdout(predicate::str::contains("--category-column"))
        .stdout(predicate::str::contains("--delimiter"))
        .stdout(predicate::str::contains("--output"));
}

// ═══════════════════════════════════════════════════════════════════
// Report Output Tests
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_default_input_is_data_csv() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "data.csv", "value,category\n10,a\nbad,b\n20,a\n");

    resumen_in(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_rows\": 2"))
        .stdout(predicate::str::contains("\"unique_categories\": 1"));
}

#[test]
fn test_stdout_is_pure_json() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "input.csv", "value,category\n10,a\nbad,b\n20,a\n");

    let output = resumen_in(&dir).arg("input.csv").output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_rows"], 2);
    assert_eq!(report["mean_value"].as_f64(), Some(15.0));
    assert_eq!(report["sum_value"].as_f64(), Some(30.0));
    assert_eq!(report["min_value"].as_f64(), Some(10.0));
    assert_eq!(report["max_value"].as_f64(), Some(20.0));
    assert_eq!(report["unique_categories"], 1);
}

#[test]
fn test_degenerate_report_exits_zero() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "input.csv", "value,category\nbad,a\nworse,b\n");

    resumen_in(&dir)
        .arg("input.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("No valid data after processing."))
        .stdout(predicate::str::contains("total_rows").not());
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "input.csv", "value,category\n1.25,x\n2.75,y\nbad,z\n");

    let first = resumen_in(&dir).arg("input.csv").output().unwrap();
    let second = resumen_in(&dir).arg("input.csv").output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// ═══════════════════════════════════════════════════════════════════
// Warning and Error Channel Tests
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_missing_value_column_warns_on_stderr() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "input.csv", "category\na\nb\n");

    resumen_in(&dir)
        .arg("input.csv")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"))
        .stderr(predicate::str::contains("value"))
        .stdout(predicate::str::contains("\"mean_value\": null"))
        .stdout(predicate::str::contains("Warning").not());
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    resumen_in(&dir)
        .arg("nope.csv")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_missing_default_input_names_data_csv() {
    let dir = TempDir::new().unwrap();

    resumen_in(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("data.csv"));
}

#[test]
fn test_wide_delimiter_rejected() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "input.csv", "value\n1\n");

    resumen_in(&dir)
        .arg("input.csv")
        .args(["--delimiter", "\u{20ac}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single-byte"));
}

// ═══════════════════════════════════════════════════════════════════
// Flag Behavior Tests
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_output_flag_writes_file() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "input.csv", "value,category\n10,a\n20,b\n");

    resumen_in(&dir)
        .arg("input.csv")
        .args(["--output", "report.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to:"));

    let written = fs::read_to_string(dir.path().join("report.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(report["total_rows"], 2);
    assert_eq!(report["unique_categories"], 2);
}

#[test]
fn test_delimiter_flag() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "input.csv", "value;category\n10;a\n20;b\n");

    let output = resumen_in(&dir)
        .arg("input.csv")
        .args(["-d", ";"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["sum_value"].as_f64(), Some(30.0));
}

#[test]
fn test_column_override_flags() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "input.csv", "metric,label\n10,a\nbad,b\n20,a\n");

    let output = resumen_in(&dir)
        .arg("input.csv")
        .args(["--value-column", "metric", "--category-column", "label"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_rows"], 2);
    assert_eq!(report["sum_value"].as_f64(), Some(30.0));
    assert_eq!(report["unique_categories"], 1);
}
