// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Risk scoring: weighted link-type counts to a composite risk index.
//!
//! ```text
//! rework       = 2*Cloners + 2*Duplicate + 2*Supercedes + 1.5*Issue split
//! dependency   = 3*Blocker + 2*Required + 2*(dependent+Dependent)
//!              + 2*Child-Issue + 2*Problem/Incident
//! coordination = 0.1*Reference
//! risk_index   = (rework + dependency + coordination) * (0.3 if closed)
//! ```
//!
//! Weights, the closed discount, and the severity thresholds are
//! configurable; the defaults are the figures above.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::DependencyGraph;
use crate::issue::IssueMetadata;
use crate::link::{names, LinkCounts};
use crate::loader::Dataset;
use crate::trend::Trend;

/// Per-link-type multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub cloners: f64,
    pub duplicate: f64,
    pub supercedes: f64,
    pub issue_split: f64,
    pub blocker: f64,
    pub required: f64,
    pub dependent: f64,
    pub child_issue: f64,
    pub problem_incident: f64,
    pub reference: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            cloners: 2.0,
            duplicate: 2.0,
            supercedes: 2.0,
            issue_split: 1.5,
            blocker: 3.0,
            required: 2.0,
            dependent: 2.0,
            child_issue: 2.0,
            problem_incident: 2.0,
            reference: 0.1,
        }
    }
}

/// Lower bounds of the High and Medium severity bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            high: 30.0,
            medium: 12.0,
        }
    }
}

/// Everything that tunes the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiplier applied once to the risk index of closed issues.
    pub closed_discount: f64,
    pub weights: Weights,
    pub thresholds: Thresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            closed_discount: 0.3,
            weights: Weights::default(),
            thresholds: Thresholds::default(),
        }
    }
}

/// Raw link-type counts that feed the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signals {
    pub cloners: u32,
    pub duplicate: u32,
    pub supercedes: u32,
    pub splits: u32,
    pub blocker: u32,
    pub required: u32,
    /// Sum of the `dependent` and `Dependent` spellings.
    pub dependent: u32,
    pub child_issue: u32,
    pub problem_incident: u32,
    pub reference: u32,
}

impl Signals {
    pub fn from_counts(counts: &LinkCounts, issue: &str) -> Self {
        let c = |t: &str| counts.get(issue, t);
        Signals {
            cloners: c(names::CLONERS),
            duplicate: c(names::DUPLICATE),
            supercedes: c(names::SUPERCEDES),
            splits: c(names::ISSUE_SPLIT),
            blocker: c(names::BLOCKER),
            required: c(names::REQUIRED),
            dependent: c(names::DEPENDENT_LOWER) + c(names::DEPENDENT),
            child_issue: c(names::CHILD_ISSUE),
            problem_incident: c(names::PROBLEM_INCIDENT),
            reference: c(names::REFERENCE),
        }
    }

    /// Named nonzero signals in a fixed order.
    pub fn nonzero(&self) -> Vec<(&'static str, u32)> {
        [
            ("cloners", self.cloners),
            ("duplicate", self.duplicate),
            ("supercedes", self.supercedes),
            ("splits", self.splits),
            ("blocker", self.blocker),
            ("required", self.required),
            ("dependent", self.dependent),
            ("child_issue", self.child_issue),
            ("problem_incident", self.problem_incident),
            ("reference", self.reference),
        ]
        .into_iter()
        .filter(|(_, v)| *v > 0)
        .collect()
    }
}

/// The three weighted sub-scores.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Breakdown {
    pub rework: f64,
    pub dependency: f64,
    pub coordination: f64,
}

impl Breakdown {
    pub fn compute(signals: &Signals, w: &Weights) -> Self {
        let n = |v: u32| f64::from(v);
        Breakdown {
            rework: w.cloners * n(signals.cloners)
                + w.duplicate * n(signals.duplicate)
                + w.supercedes * n(signals.supercedes)
                + w.issue_split * n(signals.splits),
            dependency: w.blocker * n(signals.blocker)
                + w.required * n(signals.required)
                + w.dependent * n(signals.dependent)
                + w.child_issue * n(signals.child_issue)
                + w.problem_incident * n(signals.problem_incident),
            coordination: w.reference * n(signals.reference),
        }
    }

    /// Undiscounted risk index.
    pub fn total(&self) -> f64 {
        self.rework + self.dependency + self.coordination
    }
}

/// Dominant risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Rework/Quality")]
    ReworkQuality,
    #[serde(rename = "Schedule/Dependency")]
    ScheduleDependency,
    #[serde(rename = "General Coordination")]
    GeneralCoordination,
}

impl Category {
    /// Rework wins ties with dependency, provided it is nonzero.
    pub fn classify(rework: f64, dependency: f64) -> Self {
        if rework >= dependency && rework > 0.0 {
            Category::ReworkQuality
        } else if dependency > 0.0 {
            Category::ScheduleDependency
        } else {
            Category::GeneralCoordination
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ReworkQuality => "Rework/Quality",
            Category::ScheduleDependency => "Schedule/Dependency",
            Category::GeneralCoordination => "General Coordination",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Band for a (discounted) risk index; `None` when there is no risk.
    pub fn classify(risk_index: f64, thresholds: &Thresholds) -> Option<Self> {
        if risk_index >= thresholds.high {
            Some(Severity::High)
        } else if risk_index >= thresholds.medium {
            Some(Severity::Medium)
        } else if risk_index > 0.0 {
            Some(Severity::Low)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// Badge text, e.g. "High Risk".
    pub fn badge(&self) -> String {
        format!("{} Risk", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One issue with a nonzero risk index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredIssue {
    pub issue: String,
    pub rework_score: f64,
    pub dependency_score: f64,
    pub coordination_score: f64,
    pub risk_index: f64,
    pub category: Category,
    pub severity: Severity,
    pub downstream_impact: usize,
    pub evidence: String,
    pub signals: Signals,
    #[serde(flatten)]
    pub metadata: IssueMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

/// Human-readable evidence line. The report narrative embeds it verbatim.
///
/// ```text
/// Blocks Others: 2 | Duplicated: 1 | Split up: 0 | Talked about: 4 | Downstream impact: 3 tasks
/// ```
/// The downstream segment is present only when the impact is nonzero.
pub fn evidence(signals: &Signals, downstream_impact: usize) -> String {
    let mut s = format!(
        "Blocks Others: {} | Duplicated: {} | Split up: {} | Talked about: {}",
        signals.blocker,
        signals.duplicate + signals.cloners,
        signals.splits,
        signals.reference
    );
    if downstream_impact > 0 {
        s.push_str(&format!(" | Downstream impact: {downstream_impact} tasks"));
    }
    s
}

/// Scores one issue. Returns `None` when its risk index is zero.
pub fn score_issue(
    issue: &str,
    signals: Signals,
    metadata: IssueMetadata,
    downstream_impact: usize,
    config: &ScoringConfig,
) -> Option<ScoredIssue> {
    let breakdown = Breakdown::compute(&signals, &config.weights);
    let mut risk_index = breakdown.total();
    if metadata.is_closed {
        risk_index *= config.closed_discount;
    }
    let severity = Severity::classify(risk_index, &config.thresholds)?;

    Some(ScoredIssue {
        issue: issue.to_string(),
        rework_score: breakdown.rework,
        dependency_score: breakdown.dependency,
        coordination_score: breakdown.coordination,
        risk_index,
        category: Category::classify(breakdown.rework, breakdown.dependency),
        severity,
        downstream_impact,
        evidence: evidence(&signals, downstream_impact),
        signals,
        metadata,
        trend: None,
    })
}

/// Scores every linked issue in first-seen order, dropping zero-risk issues.
pub fn score_dataset(
    dataset: &Dataset,
    graph: &DependencyGraph,
    config: &ScoringConfig,
) -> Vec<ScoredIssue> {
    dataset
        .counts
        .issues()
        .filter_map(|key| {
            score_issue(
                key,
                Signals::from_counts(&dataset.counts, key),
                dataset.metadata_for(key),
                graph.downstream_impact(key),
                config,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
