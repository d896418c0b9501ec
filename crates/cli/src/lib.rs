// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lkrs - ranks at-risk issues from issue-tracker link data.
//!
//! This crate provides the `linkrisk` command-line surface on top of
//! [`lk_core`]: configuration, acquisition over HTTP, and text rendering.
//!
//! # Main Components
//!
//! - [`Config`] - TOML configuration (snapshot paths, scoring weights, fetch settings)
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`Error`] - error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = lkrs::Cli::parse_from(["linkrisk", "report", "-n", "5"]);
//! lkrs::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;

pub mod config;
pub mod env;
pub mod error;

pub use cli::{Cli, Command, InputArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use std::time::Duration;

use clap::CommandFactory;
use clap_complete::generate;

use commands::fetch::FetchOverrides;
use commands::report::ReportOptions;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        config, command, ..
    } = cli;

    if let Command::Completion { shell } = command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "linkrisk", &mut std::io::stdout());
        return Ok(());
    }

    let (config, source) = commands::load_config(config.as_deref())?;
    match command {
        Command::Report {
            input,
            limit,
            baseline,
            watch,
            interval,
            output,
        } => {
            let opts = ReportOptions {
                limit: limit.map(|n| n as usize),
                baseline,
                output,
                color: output == OutputFormat::Text && colors::should_colorize(),
            };
            let watch = watch.then(|| Duration::from_secs(interval));
            commands::report::run(&config, &input, opts, watch)
        }
        Command::Show {
            keys,
            input,
            output,
        } => commands::show::run(&config, &input, &keys, output),
        Command::Fetch {
            data_dir,
            base_url,
            jql,
            page_size,
        } => commands::fetch::run(
            &config,
            FetchOverrides {
                data_dir,
                base_url,
                jql,
                page_size: page_size.map(|n| n as usize),
            },
        ),
        Command::Extract { input } => commands::extract::run(&config, &input),
        Command::Config => commands::config::run(&config, source.as_deref()),
        Command::Completion { .. } => Ok(()),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
