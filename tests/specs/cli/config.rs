// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for configuration discovery and `linkrisk config`.

#![allow(clippy::unwrap_used)]

use super::common::*;

#[test]
fn prints_defaults_without_a_file() {
    let temp = TempDir::new().unwrap();
    linkrisk(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# built-in defaults"))
        .stdout(predicate::str::contains("closed_discount = 0.3"))
        .stdout(predicate::str::contains("top_n = 15"));
}

#[test]
fn picks_up_working_directory_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("linkrisk.toml"), "[report]\ntop_n = 4\n").unwrap();
    linkrisk(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("linkrisk.toml"))
        .stdout(predicate::str::contains("top_n = 4"));
}

#[test]
fn environment_path_wins_over_working_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("linkrisk.toml"), "[report]\ntop_n = 4\n").unwrap();
    std::fs::write(temp.path().join("other.toml"), "[report]\ntop_n = 9\n").unwrap();
    linkrisk(temp.path())
        .arg("config")
        .env("LINKRISK_CONFIG", "other.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("top_n = 9"));
}

#[test]
fn explicit_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    linkrisk(temp.path())
        .args(["config", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found: nope.toml"));
}

#[test]
fn invalid_values_are_rejected() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("linkrisk.toml"),
        "[scoring]\nclosed_discount = 1.5\n",
    )
    .unwrap();
    linkrisk(temp.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("closed_discount"));
}

#[test]
fn custom_data_dir_is_used_by_report() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("linkrisk.toml"), "data_dir = \"snap\"\n").unwrap();
    std::fs::create_dir(temp.path().join("snap")).unwrap();
    std::fs::write(
        temp.path().join("snap/links.ndjson"),
        "{\"source\":\"A-1\",\"target\":\"A-2\",\"type\":\"Blocker\"}\n",
    )
    .unwrap();
    linkrisk(temp.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("A-1"));
}
