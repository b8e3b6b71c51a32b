//! End-to-end tests for the hexagram CLI binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TO_THE_CAVE: &str = "talk guide\nrespond\nrespond\ngo west\ntake torch\n";

fn hexagram() -> Command {
    Command::cargo_bin("hexagram").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_opens_in_the_courtyard() {
    hexagram()
        .args(["play", "--no-save"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Courtyard of Light"));
}

#[test]
fn play_reports_unknown_commands() {
    hexagram()
        .args(["play", "--no-save"])
        .write_stdin("dance wildly\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command"));
}

#[test]
fn play_ends_at_end_of_input() {
    hexagram()
        .args(["play", "--no-save"])
        .write_stdin("look\n")
        .assert()
        .success();
}

#[test]
fn no_save_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    hexagram()
        .args(["play", "--no-save", "--save"])
        .arg(&save)
        .write_stdin(TO_THE_CAVE)
        .assert()
        .success();
    assert!(!save.exists());
}

#[test]
fn play_resumes_a_saved_game() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    hexagram()
        .args(["play", "--save"])
        .arg(&save)
        .write_stdin(TO_THE_CAVE)
        .assert()
        .success();
    assert!(save.exists());

    hexagram()
        .args(["play", "--save"])
        .arg(&save)
        .write_stdin("inventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cave of Shadows"))
        .stdout(predicate::str::contains("Torch"));
}

#[test]
fn fresh_ignores_the_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    hexagram()
        .args(["play", "--save"])
        .arg(&save)
        .write_stdin(TO_THE_CAVE)
        .assert()
        .success();

    hexagram()
        .args(["play", "--fresh", "--save"])
        .arg(&save)
        .write_stdin("inventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory: (empty)"));
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[test]
fn status_without_save() {
    let dir = TempDir::new().unwrap();
    hexagram()
        .args(["status", "--save"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved game."));
}

#[test]
fn status_summarizes_the_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    hexagram()
        .args(["play", "--save"])
        .arg(&save)
        .write_stdin(TO_THE_CAVE)
        .assert()
        .success();

    hexagram()
        .args(["status", "--save"])
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cave of Shadows"))
        .stdout(predicate::str::contains("Torch"))
        .stdout(predicate::str::contains("0/6"));
}

#[test]
fn status_rejects_a_corrupt_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    fs::write(&save, "{not json").unwrap();
    hexagram()
        .args(["status", "--save"])
        .arg(&save)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// reset
// ---------------------------------------------------------------------------

#[test]
fn reset_deletes_the_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    hexagram()
        .args(["play", "--save"])
        .arg(&save)
        .write_stdin(TO_THE_CAVE)
        .assert()
        .success();
    assert!(save.exists());

    hexagram()
        .args(["reset", "--save"])
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved game cleared"));
    assert!(!save.exists());
}

#[test]
fn reset_without_save_is_fine() {
    let dir = TempDir::new().unwrap();
    hexagram()
        .args(["reset", "--save"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .success();
}
