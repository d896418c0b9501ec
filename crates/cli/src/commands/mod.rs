// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod extract;
pub mod fetch;
pub mod report;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::env;
use crate::error::Result;

/// Helper to load the effective config from the current context.
///
/// Returns the file it came from, or `None` for built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    let cwd = std::env::current_dir()?;
    let from_env = env::config_path();
    let (config, source) = Config::discover(explicit, from_env.as_deref(), &cwd)?;
    match &source {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("using built-in config"),
    }
    Ok((config, source))
}
