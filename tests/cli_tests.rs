//! Binary-level tests for the pomotick CLI.
//!
//! These run the compiled binary and verify:
//! - Help and version output
//! - Argument validation errors
//! - A short end-to-end timer run with second-resolution durations

use assert_cmd::Command;
use predicates::prelude::*;

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("pomotick")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn run_help_lists_duration_flags() {
    Command::cargo_bin("pomotick")
        .unwrap()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--work"))
        .stdout(predicate::str::contains("--short-break"))
        .stdout(predicate::str::contains("--long-break"))
        .stdout(predicate::str::contains("--interval"));
}

#[test]
fn version_flag_prints_version() {
    Command::cargo_bin("pomotick")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pomotick"));
}

// ============================================================================
// Argument Validation
// ============================================================================

#[test]
fn zero_work_duration_is_rejected() {
    Command::cargo_bin("pomotick")
        .unwrap()
        .args(["run", "--work", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--work"));
}

#[test]
fn zero_interval_is_rejected() {
    Command::cargo_bin("pomotick")
        .unwrap()
        .args(["run", "--interval", "0"])
        .assert()
        .failure();
}

#[test]
fn unknown_subcommand_is_rejected() {
    Command::cargo_bin("pomotick")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_bash_emits_script() {
    Command::cargo_bin("pomotick")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomotick"));
}

// ============================================================================
// End-to-End Run
// ============================================================================

#[test]
fn one_second_session_completes_in_json_mode() {
    // A one-second work phase ends on the interval's immediate first tick,
    // so this finishes without real waiting.
    Command::cargo_bin("pomotick")
        .unwrap()
        .args([
            "run", "--seconds", "--work", "1", "--short-break", "1", "--long-break", "1",
            "--sessions", "1", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"event\":\"started\""))
        .stdout(predicate::str::contains("\"event\":\"phase_ended\""))
        .stdout(predicate::str::contains("\"event\":\"phase_started\""));
}

#[test]
fn one_second_session_prints_summary_in_human_mode() {
    Command::cargo_bin("pomotick")
        .unwrap()
        .args([
            "run", "--seconds", "--work", "1", "--short-break", "1", "--long-break", "1",
            "--sessions", "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed 1 work session(s)"));
}
