// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flattening of raw tracker issues into link records.
//!
//! The tracker reports each link from both ends: an issue lists the issues
//! it points at (`outwardIssue`) and the issues pointing at it
//! (`inwardIssue`). Both are normalised to `source -> target` records.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::jsonl;
use crate::link::{Direction, LinkRecord};

/// Field projection requested from the tracker's search endpoint.
pub const SEARCH_FIELDS: [&str; 10] = [
    "key",
    "created",
    "updated",
    "resolutiondate",
    "duedate",
    "status",
    "issuetype",
    "priority",
    "assignee",
    "issuelinks",
];

/// One page of search results. Issues are kept as raw JSON so they can be
/// written back out unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub issues: Vec<Value>,
    #[serde(default)]
    pub total: Option<usize>,
}

impl SearchPage {
    /// Offset of the next page, or `None` when the search is exhausted.
    ///
    /// Without a `total`, a page shorter than `page_size` is the last one.
    pub fn next_start(&self, start: usize, page_size: usize) -> Option<usize> {
        if self.issues.is_empty() {
            return None;
        }
        let next = start + self.issues.len();
        match self.total {
            Some(total) if next >= total => None,
            None if self.issues.len() < page_size => None,
            _ => Some(next),
        }
    }
}

fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Link records for one raw issue, in the order the tracker lists them.
pub fn extract_links(issue: &Value) -> Vec<LinkRecord> {
    let Some(key) = str_at(issue, "/key") else {
        return Vec::new();
    };
    let Some(entries) = issue.pointer("/fields/issuelinks").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for entry in entries {
        let Some(link_type) = str_at(entry, "/type/name") else {
            continue;
        };
        if let Some(outward) = str_at(entry, "/outwardIssue/key") {
            records.push(LinkRecord::new(key, outward, link_type).with_direction(Direction::Outward));
        }
        if let Some(inward) = str_at(entry, "/inwardIssue/key") {
            records.push(LinkRecord::new(inward, key, link_type).with_direction(Direction::Inward));
        }
    }
    records
}

/// Totals from [`extract_file`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub issues: usize,
    pub links: usize,
}

/// Rewrites `links_path` from the raw issues in `issues_path`.
pub fn extract_file(issues_path: &Path, links_path: &Path) -> Result<ExtractStats> {
    let issues: Vec<Value> = jsonl::read_all(issues_path)?;
    let mut writer = jsonl::Writer::create(links_path)?;
    for issue in &issues {
        for link in extract_links(issue) {
            writer.write(&link)?;
        }
    }
    let links = writer.finish()?;
    debug!(issues = issues.len(), links, "extracted links");
    Ok(ExtractStats {
        issues: issues.len(),
        links,
    })
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
