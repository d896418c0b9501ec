// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `linkrisk report` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

/// X-1 blocks X-2 and X-3 and has a self-referencing duplicate link.
fn self_link_snapshot() -> Snapshot {
    Snapshot::new()
        .link("X-1", "X-2", "Blocker")
        .link("X-1", "X-3", "Blocker")
        .link("X-1", "X-1", "Duplicate")
        .write_links()
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn self_link_counts_twice_and_dependency_wins() {
    let snap = self_link_snapshot();
    let json = snap.json(&["report", "-o", "json"]);
    let top = &json["issues"][0];

    assert_eq!(top["issue"], "X-1");
    assert_eq!(top["signals"]["blocker"], 2);
    assert_eq!(top["signals"]["duplicate"], 2);
    assert_eq!(top["dependency_score"], 6.0);
    assert_eq!(top["rework_score"], 4.0);
    assert_eq!(top["risk_index"], 10.0);
    assert_eq!(top["category"], "Schedule/Dependency");
    assert_eq!(top["severity"], "Low");
    assert_eq!(top["downstream_impact"], 2);
    assert_eq!(top["status"], "Unknown");
    assert_eq!(top["priority"], "None");
    assert_eq!(top["issue_type"], "Task");
    assert_eq!(
        top["evidence"],
        "Blocks Others: 2 | Duplicated: 2 | Split up: 0 | Talked about: 0 | Downstream impact: 2 tasks"
    );
}

#[test]
fn closed_issue_is_discounted_once() {
    let mut snap = Snapshot::new()
        .issue("OPEN-1", "Open", "new")
        .issue("DONE-1", "Closed", "done");
    for i in 0..10 {
        snap = snap
            .link("OPEN-1", &format!("T-{i}"), "Blocker")
            .link("DONE-1", &format!("U-{i}"), "Blocker");
    }
    let snap = snap.write();
    let json = snap.json(&["report", "-o", "json"]);
    let issues = json["issues"].as_array().unwrap();

    let find = |key: &str| issues.iter().find(|i| i["issue"] == key).unwrap().clone();
    assert_eq!(find("OPEN-1")["risk_index"], 30.0);
    assert_eq!(find("OPEN-1")["severity"], "High");
    assert_eq!(find("DONE-1")["risk_index"], 9.0);
    assert_eq!(find("DONE-1")["severity"], "Low");
    assert_eq!(json["summary"]["high_risk"], 1);
}

#[test]
fn ranking_is_non_increasing_and_zero_risk_is_absent() {
    let snap = Snapshot::new()
        .link("A-1", "A-2", "Reference")
        .link("B-1", "B-2", "Blocker")
        .link("C-1", "C-2", "Duplicate")
        .link("D-1", "D-2", "Relates")
        .write_links();
    let json = snap.json(&["report", "-o", "json"]);
    let issues = json["issues"].as_array().unwrap();

    let scores: Vec<f64> = issues.iter().map(|i| i["risk_index"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(scores.iter().all(|s| *s > 0.0));
    assert!(issues.iter().all(|i| i["issue"] != "D-1" && i["issue"] != "D-2"));
    assert_eq!(json["summary"]["total_linked"], 8);
}

#[test]
fn table_holds_at_most_fifteen_rows() {
    let mut snap = Snapshot::new();
    for i in 0..20 {
        snap = snap.link(&format!("P-{i}"), &format!("Q-{i}"), "Blocker");
    }
    let snap = snap.write_links();

    snap.cmd()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 15 At-Risk Issues"));
}

// =============================================================================
// Text output
// =============================================================================

#[test]
fn text_report_sections() {
    let snap = self_link_snapshot();
    snap.cmd()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Tasks Tracked:   N/A"))
        .stdout(predicate::str::contains("Known Dependencies:    3"))
        .stdout(predicate::str::contains("Highly At-Risk Issues (Score > 10): 0"))
        .stdout(predicate::str::contains("Top 3 At-Risk Issues"))
        .stdout(predicate::str::contains("Executive Summary:"))
        .stdout(predicate::str::contains(
            "The main bottleneck right now is X-1, which has a Risk Score of 10.00.",
        ))
        .stdout(predicate::str::contains("Predictive Events:"))
        .stdout(predicate::str::contains("Recommendations:"))
        .stdout(predicate::str::contains("1. Validate downstream impact for X-1."));
}

#[test]
fn limit_flag_shrinks_table() {
    let snap = self_link_snapshot();
    snap.cmd()
        .args(["report", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 2 At-Risk Issues"));
}

#[test]
fn config_file_retunes_weights() {
    let snap = self_link_snapshot();
    std::fs::write(
        snap.temp.path().join("linkrisk.toml"),
        "[scoring.weights]\nblocker = 10.0\n",
    )
    .unwrap();

    let json = snap.json(&["report", "-o", "json"]);
    assert_eq!(json["issues"][0]["dependency_score"], 20.0);
    assert_eq!(json["issues"][0]["severity"], "Medium");
}

// =============================================================================
// Trend
// =============================================================================

#[test]
fn baseline_report_yields_trends() {
    let snap = self_link_snapshot();
    let baseline = snap.temp.path().join("last-week.json");
    std::fs::write(
        &baseline,
        json!({"issues": [
            {"issue": "X-1", "risk_index": 12.5},
            {"issue": "X-2", "risk_index": 3.0},
        ]})
        .to_string(),
    )
    .unwrap();

    let json = snap.json(&["report", "-o", "json", "--baseline", "last-week.json"]);
    let trend = |key: &str| {
        json["issues"]
            .as_array()
            .unwrap()
            .iter()
            .find(|i| i["issue"] == key)
            .unwrap()["trend"]
            .clone()
    };
    assert_eq!(trend("X-1"), "Improving");
    assert_eq!(trend("X-2"), "Stable");
    assert_eq!(trend("X-3"), "New");
}

#[test]
fn no_trend_without_baseline() {
    let snap = self_link_snapshot();
    let json = snap.json(&["report", "-o", "json"]);
    assert!(json["issues"][0].get("trend").map_or(true, Value::is_null));
}

#[test]
fn broken_baseline_fails() {
    let snap = self_link_snapshot();
    std::fs::write(snap.temp.path().join("bad.json"), "not json").unwrap();
    snap.cmd()
        .args(["report", "--baseline", "bad.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid baseline report"));
}

// =============================================================================
// Missing or broken input
// =============================================================================

#[test]
fn missing_links_file_halts_with_hint() {
    let snap = Snapshot::new().issue("X-1", "Open", "new").write_issues();
    snap.cmd()
        .arg("report")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("input not found"))
        .stderr(predicate::str::contains("links.ndjson"))
        .stderr(predicate::str::contains("linkrisk fetch"));
}

#[test]
fn empty_links_file_is_distinct_from_missing() {
    let snap = Snapshot::new().issue("X-1", "Open", "new").write();
    snap.cmd()
        .arg("report")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no link data"))
        .stderr(predicate::str::contains("input not found").not());
}

#[test]
fn malformed_link_names_the_line() {
    let snap = self_link_snapshot();
    let mut body = std::fs::read_to_string(snap.links_path()).unwrap();
    body.push_str("{\"source\": \"X-9\", \"target\": \"X-10\"}\n");
    std::fs::write(snap.links_path(), body).unwrap();

    snap.cmd()
        .arg("report")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("links.ndjson:4"))
        .stderr(predicate::str::contains("type"));
}

#[test]
fn explicit_file_flags_override_data_dir() {
    let snap = self_link_snapshot();
    let moved = snap.temp.path().join("elsewhere.ndjson");
    std::fs::rename(snap.links_path(), &moved).unwrap();

    snap.cmd()
        .args(["report", "--links", "elsewhere.ndjson"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X-1"));
}
