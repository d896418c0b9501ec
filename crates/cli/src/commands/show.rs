// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use lk_core::{Dataset, Report, ScoredIssue};

use crate::cli::{InputArgs, OutputFormat};
use crate::config::Config;
use crate::display::format_breakdown;
use crate::error::{Error, Result};

pub fn run(config: &Config, input: &InputArgs, keys: &[String], output: OutputFormat) -> Result<()> {
    let (issues, links) = input.resolve(config);
    let dataset = Dataset::load(&issues, &links)?;
    run_impl(&mut io::stdout().lock(), config, &dataset, keys, output)
}

/// Internal implementation that accepts a loaded dataset for testing.
pub(crate) fn run_impl(
    out: &mut impl Write,
    config: &Config,
    dataset: &Dataset,
    keys: &[String],
    output: OutputFormat,
) -> Result<()> {
    let report = Report::generate(dataset, &config.scoring, &config.report, None);

    // Resolve every key before printing anything.
    let found: Vec<(usize, &ScoredIssue)> = keys
        .iter()
        .map(|key| {
            report
                .issues
                .iter()
                .enumerate()
                .find(|(_, s)| s.issue == *key)
                .map(|(i, s)| (i + 1, s))
                .ok_or_else(|| Error::UnknownIssue(key.clone()))
        })
        .collect::<Result<_>>()?;

    match output {
        OutputFormat::Text => {
            for (i, (rank, issue)) in found.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                let mut lines = format_breakdown(issue).into_iter();
                if let Some(first) = lines.next() {
                    writeln!(out, "{first}  rank={rank}/{}", report.issues.len())?;
                }
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
        }
        OutputFormat::Json => {
            let issues: Vec<&ScoredIssue> = found.iter().map(|(_, s)| *s).collect();
            serde_json::to_writer_pretty(&mut *out, &issues)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
