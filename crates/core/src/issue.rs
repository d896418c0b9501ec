// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue metadata as exported by the tracker.
//!
//! The tracker's search API returns deeply nested `fields`; only status,
//! priority, type, and resolution are kept.

use serde::{Deserialize, Serialize};

/// Status category key that marks an issue as finished.
const DONE_CATEGORY: &str = "done";

/// Flattened metadata for one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueMetadata {
    /// Status display name (e.g., "In Progress").
    pub status: String,
    /// Priority display name (e.g., "Major").
    pub priority: String,
    /// Issue type display name (e.g., "Bug").
    pub issue_type: String,
    /// True when the issue has a resolution date or a done status category.
    pub is_closed: bool,
}

impl Default for IssueMetadata {
    fn default() -> Self {
        IssueMetadata {
            status: "Unknown".to_string(),
            priority: "None".to_string(),
            issue_type: "Task".to_string(),
            is_closed: false,
        }
    }
}

/// One line of the issues file, as written by the acquisition step.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub key: String,
    #[serde(default)]
    pub fields: Option<RawFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFields {
    #[serde(default)]
    pub status: Option<RawStatus>,
    #[serde(default)]
    pub priority: Option<Named>,
    #[serde(default)]
    pub issuetype: Option<Named>,
    /// Only presence matters; the timestamp format is tracker-specific.
    #[serde(default)]
    pub resolutiondate: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatus {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "statusCategory")]
    pub status_category: Option<RawStatusCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatusCategory {
    #[serde(default)]
    pub key: Option<String>,
}

/// A `{ "name": ... }` object, used for priority and issue type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: Option<String>,
}

impl RawIssue {
    /// Splits the record into its key and flattened metadata, applying
    /// defaults for every absent field.
    pub fn into_metadata(self) -> (String, IssueMetadata) {
        let defaults = IssueMetadata::default();
        let fields = self.fields.unwrap_or_default();

        let status_category = fields
            .status
            .as_ref()
            .and_then(|s| s.status_category.as_ref())
            .and_then(|c| c.key.as_deref());
        let is_closed = fields.resolutiondate.is_some() || status_category == Some(DONE_CATEGORY);

        let meta = IssueMetadata {
            status: fields
                .status
                .and_then(|s| s.name)
                .unwrap_or(defaults.status),
            priority: fields
                .priority
                .and_then(|p| p.name)
                .unwrap_or(defaults.priority),
            issue_type: fields
                .issuetype
                .and_then(|t| t.name)
                .unwrap_or(defaults.issue_type),
            is_closed,
        };
        (self.key, meta)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
