//! CLI error-path tests
//!
//! Exercise the binary's error boundary: each failure kind maps to its own
//! message and exit code. These paths all fail before the network call.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn generate_missing_raw_directory_exits_2() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("weeklyreport")
        .unwrap()
        .arg("generate")
        .arg(dir.path().join("raw"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("input problem"));
}

#[test]
fn generate_missing_category_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw");
    std::fs::create_dir_all(raw.join("tasks")).unwrap();
    // no others/

    Command::cargo_bin("weeklyreport")
        .unwrap()
        .arg("generate")
        .arg(&raw)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("others"));
}

#[test]
fn compile_missing_input_exits_2() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("weeklyreport")
        .unwrap()
        .arg("compile")
        .arg(dir.path().join("missing.md"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("input problem"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    Command::cargo_bin("weeklyreport")
        .unwrap()
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_both_commands() {
    Command::cargo_bin("weeklyreport")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("compile"));
}
