//! Integration tests for the `respawn` binary.
//!
//! Every case here exits on its own: invocation and configuration errors are
//! reported before the watch loop would block.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn respawn(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("respawn").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RESPAWN_DEBOUNCE_MS")
        .env_remove("RESPAWN_CLEAR_SCREEN")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_no_arguments_fails() {
    let dir = TempDir::new().unwrap();

    respawn(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No arguments supplied"));
}

#[test]
fn test_only_options_fails() {
    let dir = TempDir::new().unwrap();

    respawn(&dir)
        .args(["--no-clear", "-d", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No arguments supplied"));
}

#[test]
fn test_missing_program_fails() {
    let dir = TempDir::new().unwrap();

    respawn(&dir)
        .args(["--no-clear", "respawn-test-no-such-program-xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("respawn-test-no-such-program-xyz"));
}

#[test]
fn test_zero_debounce_is_rejected() {
    let dir = TempDir::new().unwrap();

    respawn(&dir)
        .args(["--debounce", "0", "echo", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("debounce_ms"));
}

#[test]
fn test_env_debounce_is_validated() {
    let dir = TempDir::new().unwrap();

    respawn(&dir)
        .env("RESPAWN_DEBOUNCE_MS", "700000")
        .args(["echo", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("debounce_ms"));
}

#[test]
fn test_malformed_config_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("respawn.toml"), "debounce_ms = [").unwrap();

    respawn(&dir)
        .args(["echo", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();

    respawn(&dir)
        .args(["--config", "nope.toml", "echo", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let dir = TempDir::new().unwrap();

    respawn(&dir)
        .args(["-v", "-q", "echo", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_help_describes_command() {
    let dir = TempDir::new().unwrap();

    respawn(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMAND"))
        .stdout(predicate::str::contains("--debounce"));
}
