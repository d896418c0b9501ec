// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use lkrs::Cli;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so report output on stdout stays parseable.
fn setup_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Exit code when the run found no data to analyse.
const EXIT_NO_DATA: i32 = 2;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    if let Err(e) = lkrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(if e.is_no_data() { EXIT_NO_DATA } else { 1 });
    }
}
