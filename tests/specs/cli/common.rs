// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

pub use predicates::prelude::*;
pub use serde_json::{json, Value};
pub use tempfile::TempDir;

/// `linkrisk` isolated from the caller's config, colors, and log filter.
pub fn linkrisk(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("linkrisk").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("LINKRISK_CONFIG")
        .env_remove("LINKRISK_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

/// A temp working directory with a `data/` snapshot.
pub struct Snapshot {
    pub temp: TempDir,
    issues: Vec<Value>,
    links: Vec<Value>,
}

impl Snapshot {
    pub fn new() -> Self {
        Snapshot {
            temp: TempDir::new().unwrap(),
            issues: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn issue(mut self, key: &str, status: &str, category: &str) -> Self {
        self.issues.push(json!({
            "key": key,
            "fields": {
                "status": {"name": status, "statusCategory": {"key": category}},
                "priority": {"name": "Major"},
                "issuetype": {"name": "Bug"},
            }
        }));
        self
    }

    pub fn raw_issue(mut self, issue: Value) -> Self {
        self.issues.push(issue);
        self
    }

    pub fn link(mut self, source: &str, target: &str, link_type: &str) -> Self {
        self.links
            .push(json!({"source": source, "target": target, "type": link_type}));
        self
    }

    pub fn data_dir(&self) -> PathBuf {
        self.temp.path().join("data")
    }

    pub fn issues_path(&self) -> PathBuf {
        self.data_dir().join("issues.ndjson")
    }

    pub fn links_path(&self) -> PathBuf {
        self.data_dir().join("links.ndjson")
    }

    /// Writes both files.
    pub fn write(self) -> Self {
        self.write_issues().write_links()
    }

    pub fn write_issues(self) -> Self {
        write_lines(&self.issues_path(), &self.issues);
        self
    }

    pub fn write_links(self) -> Self {
        write_lines(&self.links_path(), &self.links);
        self
    }

    pub fn cmd(&self) -> Command {
        linkrisk(self.temp.path())
    }

    /// Runs the command and parses stdout as JSON.
    pub fn json(&self, args: &[&str]) -> Value {
        let output = self.cmd().args(args).output().unwrap();
        assert!(
            output.status.success(),
            "linkrisk {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

fn write_lines(path: &Path, records: &[Value]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let body: String = records.iter().map(|r| format!("{r}\n")).collect();
    fs::write(path, body).unwrap();
}
