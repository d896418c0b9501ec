// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use tracing::debug;

use lk_core::{Baseline, DatasetCache, Narrative, Report, ScoredIssue, Summary};

use crate::cli::{InputArgs, OutputFormat};
use crate::colors;
use crate::config::Config;
use crate::display::{format_brief, format_summary, format_table};
use crate::error::Result;

/// Rendering choices for one report.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Overrides `report.top_n`; also trims the JSON issue list.
    pub limit: Option<usize>,
    pub baseline: Option<PathBuf>,
    pub output: OutputFormat,
    pub color: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    summary: &'a Summary,
    issues: &'a [ScoredIssue],
    top_n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    narrative: Option<&'a Narrative>,
}

pub fn run(
    config: &Config,
    input: &InputArgs,
    opts: ReportOptions,
    watch: Option<Duration>,
) -> Result<()> {
    let (issues, links) = input.resolve(config);
    let baseline = opts.baseline.as_deref().map(Baseline::load).transpose()?;
    if let Some(b) = &baseline {
        debug!(issues = b.len(), "loaded baseline");
    }
    let mut cache = DatasetCache::new(issues, links);

    match watch {
        Some(interval) => watch_loop(config, &mut cache, baseline.as_ref(), &opts, interval),
        None => run_impl(&mut io::stdout().lock(), config, &mut cache, baseline.as_ref(), &opts),
    }
}

/// Internal implementation that accepts the output and cache for testing.
pub(crate) fn run_impl(
    out: &mut impl Write,
    config: &Config,
    cache: &mut DatasetCache,
    baseline: Option<&Baseline>,
    opts: &ReportOptions,
) -> Result<()> {
    let dataset = cache.get()?;
    let mut report_config = config.report;
    if let Some(limit) = opts.limit {
        report_config.top_n = limit;
    }
    let report = Report::generate(&dataset, &config.scoring, &report_config, baseline);

    match opts.output {
        OutputFormat::Text => write_text(out, &report, report_config.high_risk_cutoff, opts.color),
        OutputFormat::Json => write_json(out, &report, opts.limit.is_some()),
    }
}

fn write_text(out: &mut impl Write, report: &Report, cutoff: f64, color: bool) -> Result<()> {
    let heading = |text: &str| {
        if color {
            colors::header(text)
        } else {
            text.to_string()
        }
    };

    writeln!(out, "{}", heading("Link Risk Report"))?;
    for line in format_summary(&report.summary, cutoff) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;

    let rows = report.top();
    writeln!(out, "{}", heading(&format!("Top {} At-Risk Issues", rows.len())))?;
    for line in format_table(rows, color) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;

    match &report.narrative {
        Some(narrative) => {
            for line in format_brief(narrative) {
                writeln!(out, "{line}")?;
            }
        }
        None => {
            writeln!(out, "Executive Summary:")?;
            writeln!(out, "  No open issue carries link risk.")?;
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, report: &Report, limited: bool) -> Result<()> {
    let issues = if limited { report.top() } else { &report.issues };
    let json = JsonReport {
        generated_at: Utc::now(),
        summary: &report.summary,
        issues,
        top_n: report.top_n,
        narrative: report.narrative.as_ref(),
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}

/// Re-renders whenever the cache reloads. Load failures are reported once
/// per distinct message and retried on the next tick.
fn watch_loop(
    config: &Config,
    cache: &mut DatasetCache,
    baseline: Option<&Baseline>,
    opts: &ReportOptions,
    interval: Duration,
) -> Result<()> {
    let mut last_error: Option<String> = None;
    loop {
        match cache.refresh() {
            Ok(true) => {
                last_error = None;
                let mut out = io::stdout().lock();
                if opts.output == OutputFormat::Text {
                    let stamp = format!("-- refreshed {} --", Local::now().format("%H:%M:%S"));
                    if opts.color {
                        writeln!(out, "{}", colors::context(&stamp))?;
                    } else {
                        writeln!(out, "{stamp}")?;
                    }
                }
                run_impl(&mut out, config, cache, baseline, opts)?;
                out.flush()?;
            }
            Ok(false) => {}
            Err(e) => {
                let message = e.to_string();
                if last_error.as_deref() != Some(message.as_str()) {
                    eprintln!("warning: {message}");
                    last_error = Some(message);
                }
            }
        }
        thread::sleep(interval);
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
