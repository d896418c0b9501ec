// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `linkrisk extract` and the report it feeds.

#![allow(clippy::unwrap_used)]

use super::common::*;

fn raw_snapshot() -> Snapshot {
    Snapshot::new()
        .raw_issue(json!({
            "key": "KAFKA-1",
            "fields": {
                "status": {"name": "Open", "statusCategory": {"key": "new"}},
                "issuetype": {"name": "Bug"},
                "issuelinks": [
                    {"type": {"name": "Blocker"}, "outwardIssue": {"key": "KAFKA-2"}},
                    {"type": {"name": "Reference"}, "inwardIssue": {"key": "KAFKA-3"}},
                    {"outwardIssue": {"key": "KAFKA-4"}},
                ],
            }
        }))
        .raw_issue(json!({
            "key": "KAFKA-2",
            "fields": {"resolutiondate": "2026-01-01T00:00:00.000+0000"}
        }))
        .write_issues()
}

#[test]
fn extract_writes_directed_links() {
    let snap = raw_snapshot();
    snap.cmd()
        .arg("extract")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 2 links from 2 issues"));

    let body = std::fs::read_to_string(snap.links_path()).unwrap();
    let links: Vec<Value> = body.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(
        links,
        vec![
            json!({"source": "KAFKA-1", "target": "KAFKA-2", "type": "Blocker", "direction": "outward"}),
            json!({"source": "KAFKA-3", "target": "KAFKA-1", "type": "Reference", "direction": "inward"}),
        ]
    );
}

#[test]
fn report_after_extract_uses_issue_metadata() {
    let snap = raw_snapshot();
    snap.cmd().arg("extract").assert().success();

    let json = snap.json(&["report", "-o", "json"]);
    assert_eq!(json["summary"]["total_tracked"], 2);
    let find = |key: &str| {
        json["issues"]
            .as_array()
            .unwrap()
            .iter()
            .find(|i| i["issue"] == key)
            .unwrap()
            .clone()
    };
    assert_eq!(find("KAFKA-1")["issue_type"], "Bug");
    assert_eq!(find("KAFKA-2")["is_closed"], true);
    let discounted = find("KAFKA-2")["risk_index"].as_f64().unwrap();
    assert!((discounted - 0.9).abs() < 1e-9);
}

#[test]
fn extract_without_issues_fails() {
    let snap = Snapshot::new();
    snap.cmd()
        .arg("extract")
        .assert()
        .failure()
        .stderr(predicate::str::contains("issues.ndjson"));
}
