//! Integration tests for basic CLI behavior.
//!
//! Tests that the binary exists, accepts standard flags, and each subcommand
//! responds to `--help` with appropriate text.

#![allow(deprecated)] // cargo_bin is deprecated upstream

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `fetchnodes` binary.
fn fetchnodes() -> Command {
    Command::cargo_bin("fetchnodes").expect("binary 'fetchnodes' should be built")
}

// ─── Top-level flags ─────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    fetchnodes()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: fetchnodes"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("manifest"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("decode"))
        .stdout(predicate::str::contains("image"));
}

#[test]
fn version_flag_shows_semver() {
    fetchnodes()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^fetchnodes \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn no_args_shows_error_and_usage() {
    fetchnodes()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: fetchnodes"));
}

#[test]
fn invalid_subcommand_fails() {
    fetchnodes()
        .arg("this-is-not-a-real-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ─── Subcommand help ─────────────────────────────────────────────────────────

#[test]
fn json_help() {
    fetchnodes()
        .args(["json", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("extract a path"))
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--query"))
        .stdout(predicate::str::contains("--path"));
}

#[test]
fn image_help() {
    fetchnodes()
        .args(["image", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<SOURCE>"))
        .stdout(predicate::str::contains("--input-dir"));
}

// ─── Subcommand argument validation ──────────────────────────────────────────

#[test]
fn image_missing_source_fails() {
    fetchnodes()
        .arg("image")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<SOURCE>"));
}

#[test]
fn json_string_and_file_conflict() {
    fetchnodes()
        .args(["json", "-s", "{}", "--file", "doc.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
