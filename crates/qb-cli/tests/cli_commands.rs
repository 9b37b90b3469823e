//! Integration tests for the qb-cli command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a clean bank and a flawed one.
fn bank_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("networking.json"),
        r#"[
    {
        "category": "TCP",
        "question": "What does SYN start?",
        "options": [
            {"text": "A handshake", "correct": true},
            {"text": "A teardown", "correct": false}
        ],
        "references": [{"title": "RFC 793", "url": "https://example.com/rfc793"}]
    },
    {
        "category": "DNS",
        "question": "Which record maps a name to an IPv4 address?",
        "options": [
            {"text": "A", "correct": true},
            {"text": "MX", "correct": false}
        ],
        "references": []
    }
]
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("flawed.json"),
        r#"[
    {
        "category": "Loose ends",
        "question": "Which option is right?",
        "options": [
            {"text": "this one", "correct": false},
            {"text": "no, this one", "correct": false}
        ],
        "references": []
    }
]
"#,
    )
    .unwrap();
    dir
}

#[test]
fn topics_lists_banks() {
    let dir = bank_dir();
    Command::cargo_bin("qb")
        .unwrap()
        .args(["topics", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("networking"))
        .stdout(predicate::str::contains("flawed"));
}

#[test]
fn show_displays_categories() {
    let dir = bank_dir();
    Command::cargo_bin("qb")
        .unwrap()
        .args(["show", "networking", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("TCP"))
        .stdout(predicate::str::contains("DNS"));
}

#[test]
fn check_passes_on_clean_bank() {
    let dir = bank_dir();
    Command::cargo_bin("qb")
        .unwrap()
        .args(["check", "networking", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed."));
}

#[test]
fn check_reports_lints_and_fails() {
    let dir = bank_dir();
    Command::cargo_bin("qb")
        .unwrap()
        .args(["check", "flawed", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("no option is marked correct"))
        .stderr(predicate::str::contains("problem(s) found"));
}

#[test]
fn check_fails_on_missing_topic() {
    let dir = bank_dir();
    Command::cargo_bin("qb")
        .unwrap()
        .args(["check", "history", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn board_prints_standard_layout() {
    Command::cargo_bin("qb")
        .unwrap()
        .arg("board")
        .assert()
        .success()
        .stdout(predicate::str::contains("bonus +7"))
        .stdout(predicate::str::contains("challenge"));
}

#[test]
fn play_session_starts_and_quits() {
    let dir = bank_dir();
    Command::cargo_bin("qb")
        .unwrap()
        .args(["play", "networking", "--dir"])
        .arg(dir.path())
        .write_stdin("start\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game on!"))
        .stdout(predicate::str::contains("Topic: networking"));
}

#[test]
fn play_surfaces_missing_bank_notice() {
    let dir = bank_dir();
    Command::cargo_bin("qb")
        .unwrap()
        .args(["play", "history", "--dir"])
        .arg(dir.path())
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unavailable"));
}
