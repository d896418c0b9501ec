// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `linkrisk show` command.

#![allow(clippy::unwrap_used)]

use super::common::*;

fn snapshot() -> Snapshot {
    Snapshot::new()
        .issue("SPARK-1", "Open", "new")
        .link("SPARK-1", "SPARK-2", "Blocker")
        .link("SPARK-2", "SPARK-3", "Required")
        .link("SPARK-4", "SPARK-1", "Cloners")
        .write()
}

#[test]
fn breakdown_lists_scores_and_signals() {
    let snap = snapshot();
    snap.cmd()
        .args(["show", "SPARK-1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("SPARK-1  risk_index=5.00"))
        .stdout(predicate::str::contains("rework=2.0 | dependency=3.0 | coord=0.0"))
        .stdout(predicate::str::contains("signals: cloners=1, blocker=1"))
        .stdout(predicate::str::contains("downstream impact: 2 tasks"));
}

#[test]
fn json_breakdown_includes_metadata() {
    let snap = snapshot();
    let json = snap.json(&["show", "SPARK-2", "-o", "json"]);
    let issue = &json[0];
    assert_eq!(issue["issue"], "SPARK-2");
    assert_eq!(issue["signals"]["blocker"], 1);
    assert_eq!(issue["signals"]["required"], 1);
    assert_eq!(issue["dependency_score"], 5.0);
    assert_eq!(issue["is_closed"], false);
}

#[test]
fn unknown_issue_fails() {
    let snap = snapshot();
    snap.cmd()
        .args(["show", "SPARK-404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SPARK-404"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn requires_a_key() {
    let snap = snapshot();
    snap.cmd().arg("show").assert().failure();
}
