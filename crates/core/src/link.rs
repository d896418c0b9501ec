// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directed links between tracker issues and per-issue link-type tallies.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Link-type display names as the tracker reports them.
pub mod names {
    pub const CLONERS: &str = "Cloners";
    pub const DUPLICATE: &str = "Duplicate";
    pub const SUPERCEDES: &str = "Supercedes";
    pub const ISSUE_SPLIT: &str = "Issue split";
    pub const BLOCKER: &str = "Blocker";
    pub const REQUIRED: &str = "Required";
    /// The tracker carries both spellings; they are summed.
    pub const DEPENDENT: &str = "Dependent";
    pub const DEPENDENT_LOWER: &str = "dependent";
    pub const CHILD_ISSUE: &str = "Child-Issue";
    pub const PROBLEM_INCIDENT: &str = "Problem/Incident";
    pub const REFERENCE: &str = "Reference";
}

/// Link types (lowercased) that gate other work and form dependency edges.
const DEPENDENCY_EDGE_TYPES: [&str; 5] = ["blocker", "blocks", "dependent", "required", "child-issue"];

/// Returns true if `link_type` is a blocking/required/parent-child relation.
/// Comparison is case-insensitive.
pub fn is_dependency_edge(link_type: &str) -> bool {
    let lower = link_type.to_lowercase();
    DEPENDENCY_EDGE_TYPES.contains(&lower.as_str())
}

/// Which side of the tracker's link the record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inward,
    Outward,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Inward => "inward",
            Direction::Outward => "outward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "inward" => Ok(Direction::Inward),
            "outward" => Ok(Direction::Outward),
            _ => Err(Error::InvalidInput(format!("invalid link direction: '{s}'"))),
        }
    }
}

/// One line of the links file: `source -> target` with a link-type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub link_type: String,
    /// Informational only. Any casing is accepted; an unrecognised or
    /// non-string value reads as `None` rather than failing the record.
    #[serde(
        default,
        deserialize_with = "lenient_direction",
        skip_serializing_if = "Option::is_none"
    )]
    pub direction: Option<Direction>,
}

fn lenient_direction<'de, D>(deserializer: D) -> std::result::Result<Option<Direction>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse().ok()))
}

impl LinkRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, link_type: impl Into<String>) -> Self {
        LinkRecord {
            source: source.into(),
            target: target.into(),
            link_type: link_type.into(),
            direction: None,
        }
    }

    /// Sets the direction (builder pattern).
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }
}

/// Per-issue occurrence counts keyed by link-type name.
///
/// An issue gains one count per link it takes part in, as source or as
/// target. A self-link therefore counts twice. Issues iterate in the order
/// they were first seen in the link stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkCounts {
    order: Vec<String>,
    counts: HashMap<String, HashMap<String, u32>>,
}

impl LinkCounts {
    pub fn from_links<'a>(links: impl IntoIterator<Item = &'a LinkRecord>) -> Self {
        let mut counts = LinkCounts::default();
        for link in links {
            counts.bump(&link.source, &link.link_type);
            counts.bump(&link.target, &link.link_type);
        }
        counts
    }

    fn bump(&mut self, issue: &str, link_type: &str) {
        if !self.counts.contains_key(issue) {
            self.order.push(issue.to_string());
        }
        *self
            .counts
            .entry(issue.to_string())
            .or_default()
            .entry(link_type.to_string())
            .or_insert(0) += 1;
    }

    /// Count of `link_type` links for `issue`; 0 when either is unknown.
    pub fn get(&self, issue: &str, link_type: &str) -> u32 {
        self.counts
            .get(issue)
            .and_then(|types| types.get(link_type))
            .copied()
            .unwrap_or(0)
    }

    /// All link-type counts recorded for `issue`.
    pub fn types(&self, issue: &str) -> Option<&HashMap<String, u32>> {
        self.counts.get(issue)
    }

    pub fn contains(&self, issue: &str) -> bool {
        self.counts.contains_key(issue)
    }

    /// Issue keys in first-seen order.
    pub fn issues(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct issues with at least one link.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
