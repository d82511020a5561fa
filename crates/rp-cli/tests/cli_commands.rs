//! Integration tests for the CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rp() -> Command {
    Command::cargo_bin("rp").unwrap()
}

/// Write a small, fast-running config into a temp directory.
fn small_config(dir: &TempDir) -> String {
    let path = dir.path().join("small.json");
    fs::write(
        &path,
        r#"{
    "seed": 5,
    "field": {
        "size": { "width": 40.0, "height": 40.0 },
        "resolution": 20,
        "damping": 0.9
    }
}
"#,
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_reports_summary() {
    rp().args(["run", "--ticks", "10", "--at", "200,200"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("135x135")
                .and(predicate::str::contains("10 ticks, seed=42, 1 injections"))
                .and(predicate::str::contains("Peak amplitude")),
        );
}

#[test]
fn run_without_injections_stays_flat() {
    rp().args(["run", "--ticks", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final amplitude: 0.0000"));
}

#[test]
fn run_verbose_prints_table() {
    let dir = TempDir::new().unwrap();
    let config = small_config(&dir);
    rp().args(["run", "-c", &config, "-t", "3", "--at", "20,20", "--verbose"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Tick")
                .and(predicate::str::contains("Max"))
                .and(predicate::str::contains("seed=5"))
                .and(predicate::str::contains("22x22")),
        );
}

#[test]
fn run_with_autogen_injects() {
    let dir = TempDir::new().unwrap();
    let config = small_config(&dir);
    rp().args(["run", "-c", &config, "-t", "60", "--autogen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 injections").not());
}

#[test]
fn run_rejects_bad_point() {
    rp().args(["run", "--at", "200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("X,Y"));
}

#[test]
fn run_rejects_bad_radius() {
    rp().args(["run", "--radius", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ripple radius"));
}

#[test]
fn run_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    rp().args(["run", "-c", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.json"));
}

// ---------------------------------------------------------------------------
// preview
// ---------------------------------------------------------------------------

#[test]
fn preview_draws_field() {
    let dir = TempDir::new().unwrap();
    let config = small_config(&dir);
    let output = rp()
        .args(["preview", "-c", &config, "-t", "0", "--every", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = stdout.lines().filter(|l| l.starts_with('+')).collect();
    assert_eq!(rows.len(), 20);
    assert!(rows.iter().all(|r| *r == "+".repeat(20)));
}

#[test]
fn preview_rejects_zero_step() {
    rp().args(["preview", "--every", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--every"));
}

// ---------------------------------------------------------------------------
// config / check
// ---------------------------------------------------------------------------

#[test]
fn config_prints_defaults() {
    rp().arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"resolution\": 133")
                .and(predicate::str::contains("\"ripple_strength\": 100.0"))
                .and(predicate::str::contains("\"palette\": \"grayscale\"")),
        );
}

#[test]
fn config_writes_file_then_check_accepts_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ripples.json");
    let path_str = path.to_str().unwrap();

    rp().args(["config", "--output", path_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(path.exists());

    rp().args(["check", path_str])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("OK")
                .and(predicate::str::contains("135x135"))
                .and(predicate::str::contains("one tick per frame")),
        );
}

#[test]
fn config_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ripples.json");
    fs::write(&path, "{}").unwrap();

    rp().args(["config", "--output", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn check_rejects_invalid_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "field": { "resolution": 0 } }"#).unwrap();

    rp().args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("resolution must be greater than zero"));
}

#[test]
fn check_warns_on_unstable_damping() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hot.json");
    fs::write(&path, r#"{ "field": { "damping": 1.2 }, "tick_rate": 30.0 }"#).unwrap();

    rp().args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("WARN")
                .and(predicate::str::contains("30 ticks/s")),
        );
}
