// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ranking, summary counters, and the executive narrative.
//!
//! Rendering is left to the caller; this module only decides what goes in
//! the report.

use serde::{Deserialize, Serialize};

use crate::graph::DependencyGraph;
use crate::loader::Dataset;
use crate::score::{score_dataset, Category, ScoredIssue, ScoringConfig, Severity};
use crate::trend::Baseline;

/// Report shaping options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Rows in the ranked table.
    pub top_n: usize,
    /// Issues scoring strictly above this count as highly at risk.
    pub high_risk_cutoff: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            top_n: 15,
            high_risk_cutoff: 10.0,
        }
    }
}

/// Headline counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Issues present in the issues file.
    pub total_tracked: usize,
    /// Issues taking part in at least one link.
    pub total_linked: usize,
    /// Scored issues above the high-risk cutoff.
    pub high_risk: usize,
}

/// Executive brief over open issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    /// Highest-risk open issue.
    pub top_issue: ScoredIssue,
    /// Highest-risk open issue whose dominant factor is rework.
    pub top_rework_issue: Option<ScoredIssue>,
    /// Two numbered recommendations, newline separated.
    pub recommendation_text: String,
}

impl Narrative {
    /// Selects the top issues from a ranked list. `None` when no open issue
    /// scored.
    pub fn from_ranked(ranked: &[ScoredIssue]) -> Option<Self> {
        let mut open = ranked.iter().filter(|s| !s.metadata.is_closed);
        let top_issue = open.next()?.clone();
        let top_rework_issue = std::iter::once(&top_issue)
            .chain(open)
            .find(|s| s.category == Category::ReworkQuality)
            .cloned();

        let recommendation_text = format!(
            "1. {}\n2. {}",
            primary_recommendation(&top_issue),
            rework_recommendation(top_rework_issue.as_ref())
        );
        Some(Narrative {
            top_issue,
            top_rework_issue,
            recommendation_text,
        })
    }

    /// How strongly the top issue blocks the critical path.
    pub fn blocker_severity(&self) -> &'static str {
        match self.top_issue.severity {
            Severity::High => "massive",
            Severity::Medium => "significant",
            Severity::Low => "minor",
        }
    }

    pub fn schedule_warning(&self) -> String {
        let top = &self.top_issue;
        format!(
            "Schedule Slip Risk: {} ({}) is acting as a {} critical path blocker with evidence: {}.",
            top.issue,
            top.metadata.status,
            self.blocker_severity(),
            top.evidence
        )
    }

    pub fn rework_warning(&self) -> String {
        match &self.top_rework_issue {
            Some(rework) => format!(
                "Rework Escalation: {} is exhibiting high churn, likely indicating unstable requirements or complex defect resolution.",
                rework.issue
            ),
            None => "Quality: No severe rework or churn detected among the top risks.".to_string(),
        }
    }

    pub fn headline(&self) -> String {
        let top = &self.top_issue;
        format!(
            "The main bottleneck right now is {}, which has a Risk Score of {:.2}. The main reason for this risk is its {}.",
            top.issue, top.risk_index, top.category
        )
    }
}

fn primary_recommendation(top: &ScoredIssue) -> String {
    match top.severity {
        Severity::High => format!(
            "Re-sequence dependent tasks around {} immediately to unblock downstream work.",
            top.issue
        ),
        Severity::Medium => format!(
            "Evaluate dependent tasks around {} and consider re-sequencing to minimize schedule impact.",
            top.issue
        ),
        Severity::Low => format!(
            "Validate downstream impact for {}. If actively blocked, reassess priority; if not, monitor in current backlog.",
            top.issue
        ),
    }
}

fn rework_recommendation(rework: Option<&ScoredIssue>) -> String {
    match rework {
        Some(r) => format!(
            "Break down or allocate more time to {} to isolate the rework blast radius.",
            r.issue
        ),
        None => "Monitor quality metrics to ensure rework remains low.".to_string(),
    }
}

/// Everything a presentation layer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    /// Every scored issue, highest risk first.
    pub issues: Vec<ScoredIssue>,
    pub top_n: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<Narrative>,
}

impl Report {
    /// Ranks scored issues and derives the summary and narrative.
    ///
    /// Ranking is a stable descending sort, so equal scores keep their
    /// input order.
    pub fn assemble(
        mut scored: Vec<ScoredIssue>,
        total_tracked: usize,
        total_linked: usize,
        config: &ReportConfig,
    ) -> Self {
        scored.sort_by(|a, b| b.risk_index.total_cmp(&a.risk_index));

        let summary = Summary {
            total_tracked,
            total_linked,
            high_risk: scored
                .iter()
                .filter(|s| s.risk_index > config.high_risk_cutoff)
                .count(),
        };
        let narrative = Narrative::from_ranked(&scored);

        Report {
            summary,
            issues: scored,
            top_n: config.top_n,
            narrative,
        }
    }

    /// Scores a loaded dataset end to end.
    pub fn generate(
        dataset: &Dataset,
        scoring: &ScoringConfig,
        config: &ReportConfig,
        baseline: Option<&Baseline>,
    ) -> Self {
        let graph = DependencyGraph::from_links(&dataset.links);
        let mut scored = score_dataset(dataset, &graph, scoring);
        if let Some(baseline) = baseline {
            baseline.apply(&mut scored);
        }
        Report::assemble(
            scored,
            dataset.metadata.len(),
            dataset.counts.len(),
            config,
        )
    }

    /// The ranked table rows.
    pub fn top(&self) -> &[ScoredIssue] {
        &self.issues[..self.issues.len().min(self.top_n)]
    }

    pub fn find(&self, issue: &str) -> Option<&ScoredIssue> {
        self.issues.iter().find(|s| s.issue == issue)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
