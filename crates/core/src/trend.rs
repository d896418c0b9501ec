// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Risk trend against a previous report.
//!
//! A baseline is any JSON report written by `linkrisk report --output json`;
//! only each issue's key and risk index are read from it.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::score::ScoredIssue;

/// Direction of an issue's risk index since the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Escalating,
    Stable,
    Improving,
    /// Not present in the baseline.
    New,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Escalating => "Escalating",
            Trend::Stable => "Stable",
            Trend::Improving => "Improving",
            Trend::New => "New",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Deserialize)]
struct BaselineReport {
    issues: Vec<BaselineEntry>,
}

#[derive(Deserialize)]
struct BaselineEntry {
    issue: String,
    risk_index: f64,
}

/// Risk indices from an earlier snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Baseline {
    scores: HashMap<String, f64>,
}

impl Baseline {
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::MissingInput {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        let report: BaselineReport = serde_json::from_str(&content).map_err(|e| {
            Error::InvalidInput(format!("invalid baseline report {}: {e}", path.display()))
        })?;
        Ok(Baseline::from_scores(
            report.issues.into_iter().map(|e| (e.issue, e.risk_index)),
        ))
    }

    pub fn from_scores(scores: impl IntoIterator<Item = (String, f64)>) -> Self {
        Baseline {
            scores: scores.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Compares at the two-decimal precision reports are displayed with.
    pub fn trend_for(&self, issue: &str, risk_index: f64) -> Trend {
        let Some(&previous) = self.scores.get(issue) else {
            return Trend::New;
        };
        let (now, then) = (hundredths(risk_index), hundredths(previous));
        match now.cmp(&then) {
            std::cmp::Ordering::Greater => Trend::Escalating,
            std::cmp::Ordering::Less => Trend::Improving,
            std::cmp::Ordering::Equal => Trend::Stable,
        }
    }

    /// Attaches a trend to every scored issue.
    pub fn apply(&self, scored: &mut [ScoredIssue]) {
        for issue in scored {
            issue.trend = Some(self.trend_for(&issue.issue, issue.risk_index));
        }
    }
}

fn hundredths(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

#[cfg(test)]
#[path = "trend_tests.rs"]
mod tests;
