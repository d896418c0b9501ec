// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::InputArgs;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "linkrisk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rank at-risk issues from issue-tracker link data")]
#[command(
    long_about = "Rank at-risk issues from issue-tracker link data.\n\n\
    Scores every linked issue by the kinds of links it takes part in (blockers, \
    duplicates, splits, references), then reports the riskiest open work."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Config file (default: ./linkrisk.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the ranked risk report with an executive brief
    #[command(after_help = colors::examples("\
Examples:
  linkrisk report                          Report from ./data
  linkrisk report -d snapshots/2026-10     Report from another snapshot
  linkrisk report -n 5                     Show only the top 5 issues
  linkrisk report -o json > week42.json    Save a machine-readable report
  linkrisk report --baseline week41.json   Add trend against last week
  linkrisk report --watch                  Re-render when the data changes"))]
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Rows in the ranked table (default: report.top_n)
        #[arg(long, short = 'n', value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,

        /// Previous JSON report to compute trends against
        #[arg(long, value_name = "FILE")]
        baseline: Option<PathBuf>,

        /// Keep running and re-render when the input files change
        #[arg(long)]
        watch: bool,

        /// Polling interval for --watch, in seconds
        #[arg(long, default_value = "5", requires = "watch", value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the score breakdown for specific issues
    #[command(arg_required_else_help = true)]
    #[command(after_help = colors::examples("\
Examples:
  linkrisk show SPARK-1234               Breakdown for one issue
  linkrisk show SPARK-1 SPARK-2 -o json  Breakdown for several issues as JSON"))]
    Show {
        /// Issue keys
        #[arg(required = true, value_parser = non_empty_string)]
        keys: Vec<String>,

        #[command(flatten)]
        input: InputArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Download issues from the tracker and extract their links
    #[command(after_help = colors::examples("\
Examples:
  linkrisk fetch                                   Use the configured search
  linkrisk fetch --jql \"project = KAFKA\"           Fetch another project
  linkrisk fetch --base-url https://jira.example.org -d data/example"))]
    Fetch {
        /// Output directory (default: data_dir from config)
        #[arg(long, short = 'd', value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Tracker root URL (default: fetch.base_url)
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Search query (default: fetch.jql)
        #[arg(long, value_parser = non_empty_string)]
        jql: Option<String>,

        /// Issues per page (default: fetch.page_size)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        page_size: Option<u64>,
    },

    /// Rebuild the links file from an existing issues file
    Extract {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the effective configuration as TOML
    Config,

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
