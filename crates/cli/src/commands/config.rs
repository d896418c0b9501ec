// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::Result;

pub fn run(config: &Config, source: Option<&Path>) -> Result<()> {
    run_impl(&mut io::stdout().lock(), config, source)
}

/// Prints the effective config, headed by where it came from.
pub(crate) fn run_impl(out: &mut impl Write, config: &Config, source: Option<&Path>) -> Result<()> {
    match source {
        Some(path) => writeln!(out, "# loaded from {}", path.display())?,
        None => writeln!(out, "# built-in defaults")?,
    }
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
