// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use lk_core::extract_file;

use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::Result;

pub fn run(config: &Config, input: &InputArgs) -> Result<()> {
    let (issues, links) = input.resolve(config);
    run_impl(&mut io::stdout().lock(), &issues, &links)
}

pub(crate) fn run_impl(out: &mut impl Write, issues: &Path, links: &Path) -> Result<()> {
    let stats = extract_file(issues, links)?;
    writeln!(
        out,
        "Extracted {} links from {} issues into {}",
        stats.links,
        stats.issues,
        links.display()
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
