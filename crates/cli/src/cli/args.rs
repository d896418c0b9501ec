// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that read the snapshot files.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;

/// Snapshot file location overrides.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Directory holding issues.ndjson and links.ndjson
    #[arg(long, short = 'd', value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Issues file (overrides --data-dir for this file)
    #[arg(long, value_name = "FILE")]
    pub issues: Option<PathBuf>,

    /// Links file (overrides --data-dir for this file)
    #[arg(long, value_name = "FILE")]
    pub links: Option<PathBuf>,
}

impl InputArgs {
    /// Resolves (issues, links) paths against the config.
    pub fn resolve(&self, config: &Config) -> (PathBuf, PathBuf) {
        let data_dir = self.data_dir.as_ref().unwrap_or(&config.data_dir);
        let issues = self
            .issues
            .clone()
            .unwrap_or_else(|| data_dir.join(&config.issues_file));
        let links = self
            .links
            .clone()
            .unwrap_or_else(|| data_dir.join(&config.links_file));
        (issues, links)
    }
}
