//! Integration tests for the NormWin CLI binary.
//!
//! These tests verify the CLI behavior by running the actual binary
//! and checking its output and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run the normwin CLI binary.
fn normwin_cmd() -> Command {
    Command::cargo_bin("normwin").unwrap()
}

// ============================================================================
// Single Optimization Tests
// ============================================================================

#[test]
fn cli_optimizes_the_default_perimeter() {
    normwin_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("P = 12 m"))
        .stdout(predicate::str::contains("Max area"));
}

#[test]
fn cli_optimizes_a_positional_perimeter() {
    normwin_cmd()
        .arg("20")
        .assert()
        .success()
        .stdout(predicate::str::contains("P = 20 m"));
}

#[test]
fn cli_accepts_named_argument_perimeter() {
    normwin_cmd()
        .args(["--perimeter", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P = 50 m"));
}

#[test]
fn cli_worked_example_values() {
    // P = 12: width ≈ 3.3606, area ≈ 10.08.
    normwin_cmd()
        .arg("12")
        .assert()
        .success()
        .stdout(predicate::str::contains("3.3606"))
        .stdout(predicate::str::contains("10.08"));
}

#[test]
fn cli_rejects_non_positive_perimeter() {
    normwin_cmd().arg("--").arg("-3").assert().failure();
}

// ============================================================================
// Algorithm Selection Tests
// ============================================================================

#[test]
fn cli_golden_section_strategy() {
    normwin_cmd()
        .args(["12", "-a", "golden"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Golden Section"));
}

#[test]
fn cli_closed_form_strategy() {
    normwin_cmd()
        .args(["12", "-a", "closed-form"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Closed Form"));
}

// ============================================================================
// Output Mode Tests
// ============================================================================

#[test]
fn cli_detail_flag_shows_area_split() {
    normwin_cmd()
        .args(["12", "--detail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rectangle area"))
        .stdout(predicate::str::contains("Semicircle area"));
}

#[test]
fn cli_json_output_is_parseable() {
    let output = normwin_cmd().args(["12", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["max_area"].as_f64().unwrap() > 10.0);
}

// ============================================================================
// Subcommand Tests
// ============================================================================

#[test]
fn cli_sweep_reports_statistics() {
    normwin_cmd()
        .args(["sweep", "10", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mean perimeter"))
        .stdout(predicate::str::contains("Best area seen"));
}

#[test]
fn cli_sweep_rejects_non_positive_step() {
    normwin_cmd()
        .args(["sweep", "10", "15", "--step", "0"])
        .assert()
        .failure();
}

#[test]
fn cli_table_prints_100_samples() {
    normwin_cmd()
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::contains("100 samples"));
}

#[test]
fn cli_table_json_has_100_entries() {
    let output = normwin_cmd().args(["table", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 100);
}
