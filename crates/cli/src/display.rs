// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for reports and issue breakdowns.
//!
//! Every formatter returns lines without trailing newlines; color is opt-in
//! per call so tests can assert on plain text.

use lk_core::{Narrative, ScoredIssue, Summary};

use crate::colors;

/// Maximum line width for wrapped brief paragraphs.
const WRAP_WIDTH: usize = 96;

const COLUMNS: [&str; 9] = [
    "Issue",
    "Severity",
    "Trend",
    "Type",
    "Priority",
    "Status",
    "Risk Index",
    "Category",
    "Evidence",
];
const TREND_COLUMN: usize = 2;

/// Wrap text at word boundaries if it's a single line.
pub fn wrap_text(content: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Headline metrics.
pub fn format_summary(summary: &Summary, high_risk_cutoff: f64) -> Vec<String> {
    let tracked = if summary.total_tracked == 0 {
        "N/A".to_string()
    } else {
        summary.total_tracked.to_string()
    };
    vec![
        format!("Total Tasks Tracked:   {tracked}"),
        format!("Known Dependencies:    {}", summary.total_linked),
        format!(
            "Highly At-Risk Issues (Score > {high_risk_cutoff}): {}",
            summary.high_risk
        ),
    ]
}

fn row_cells(issue: &ScoredIssue) -> [String; 9] {
    [
        issue.issue.clone(),
        issue.severity.badge(),
        issue.trend.map(|t| t.to_string()).unwrap_or_default(),
        issue.metadata.issue_type.clone(),
        issue.metadata.priority.clone(),
        issue.metadata.status.clone(),
        format!("{:.2}", issue.risk_index),
        issue.category.to_string(),
        issue.evidence.clone(),
    ]
}

/// Ranked table. The Trend column is shown only when some row has a trend.
pub fn format_table(rows: &[ScoredIssue], color: bool) -> Vec<String> {
    let show_trend = rows.iter().any(|r| r.trend.is_some());
    let visible: Vec<usize> = (0..COLUMNS.len())
        .filter(|&i| show_trend || i != TREND_COLUMN)
        .collect();

    let cells: Vec<[String; 9]> = rows.iter().map(row_cells).collect();
    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.len()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let last = visible.last().copied().unwrap_or(0);
    let render = |values: &[String], severity_code: Option<u8>| -> String {
        let mut line = String::new();
        for &i in &visible {
            let value = &values[i];
            let padded = if i == last {
                value.clone()
            } else {
                format!("{:<width$}  ", value, width = widths[i])
            };
            match severity_code {
                Some(code) if i == 1 => {
                    line.push_str(&colors::paint(code, value));
                    line.push_str(&padded[value.len()..]);
                }
                _ => line.push_str(&padded),
            }
        }
        line
    };

    let heading: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut lines = vec![if color {
        colors::header(&render(heading.as_slice(), None))
    } else {
        render(heading.as_slice(), None)
    }];
    for (row, issue) in cells.iter().zip(rows) {
        let code = color.then(|| colors::severity_code(issue.severity));
        lines.push(render(row.as_slice(), code));
    }
    lines
}

/// Executive brief paragraphs.
pub fn format_brief(narrative: &Narrative) -> Vec<String> {
    let mut lines = vec!["Executive Summary:".to_string()];
    lines.extend(wrap_text(&narrative.headline(), WRAP_WIDTH).into_iter().map(|l| format!("  {l}")));
    lines.push(String::new());
    lines.push("Predictive Events:".to_string());
    for event in [narrative.schedule_warning(), narrative.rework_warning()] {
        for (i, l) in wrap_text(&event, WRAP_WIDTH - 4).into_iter().enumerate() {
            let bullet = if i == 0 { "  * " } else { "    " };
            lines.push(format!("{bullet}{l}"));
        }
    }
    lines.push(String::new());
    lines.push("Recommendations:".to_string());
    for rec in narrative.recommendation_text.lines() {
        for (i, l) in wrap_text(rec, WRAP_WIDTH - 2).into_iter().enumerate() {
            let indent = if i == 0 { "  " } else { "     " };
            lines.push(format!("{indent}{l}"));
        }
    }
    lines
}

/// Full score breakdown for one issue.
pub fn format_breakdown(issue: &ScoredIssue) -> Vec<String> {
    let meta = &issue.metadata;
    let state = if meta.is_closed { "closed" } else { "open" };
    let mut lines = vec![
        format!("{}  risk_index={:.2}", issue.issue, issue.risk_index),
        format!(
            "  {} | {} | {} | {} ({})",
            issue.severity.badge(),
            issue.category,
            meta.issue_type,
            meta.status,
            state
        ),
        format!(
            "  rework={:.1} | dependency={:.1} | coord={:.1}",
            issue.rework_score, issue.dependency_score, issue.coordination_score
        ),
    ];

    let signals: Vec<String> = issue
        .signals
        .nonzero()
        .into_iter()
        .map(|(name, n)| format!("{name}={n}"))
        .collect();
    lines.push(format!("  signals: {}", signals.join(", ")));
    if issue.downstream_impact > 0 {
        lines.push(format!("  downstream impact: {} tasks", issue.downstream_impact));
    }
    if let Some(trend) = issue.trend {
        lines.push(format!("  trend: {trend}"));
    }
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
