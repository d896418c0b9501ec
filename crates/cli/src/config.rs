// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Configuration is read from TOML. Every field is optional; defaults
//! reproduce the stock scoring model. Lookup order:
//! - `--config <path>`
//! - `LINKRISK_CONFIG`
//! - `./linkrisk.toml`
//! - `<user config dir>/linkrisk/config.toml`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use lk_core::{ReportConfig, ScoringConfig};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "linkrisk.toml";
const USER_CONFIG_DIR: &str = "linkrisk";
const USER_CONFIG_FILE: &str = "config.toml";

/// Tracker search settings for `linkrisk fetch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Tracker root URL; the search endpoint is `<base_url>/rest/api/2/search`.
    pub base_url: String,
    pub jql: String,
    /// Issues requested per page.
    pub page_size: usize,
    /// Pause between pages, to stay under the tracker's rate limit.
    pub page_delay_ms: u64,
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            base_url: "https://issues.apache.org/jira".to_string(),
            jql: "project = SPARK AND created >= -730d ORDER BY created DESC".to_string(),
            page_size: 100,
            page_delay_ms: 200,
            timeout_secs: 60,
        }
    }
}

impl FetchConfig {
    pub fn search_url(&self) -> String {
        format!("{}/rest/api/2/search", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the snapshot files (relative to the working directory or absolute).
    pub data_dir: PathBuf,
    pub issues_file: String,
    pub links_file: String,
    pub scoring: ScoringConfig,
    pub report: ReportConfig,
    pub fetch: FetchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("data"),
            issues_file: "issues.ndjson".to_string(),
            links_file: "links.ndjson".to_string(),
            scoring: ScoringConfig::default(),
            report: ReportConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl Config {
    /// Loads and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Finds and loads the effective config.
    ///
    /// An explicit or environment-provided path must exist. The working
    /// directory and user config locations are only used if present.
    /// Returns the path the config came from, if any.
    pub fn discover(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        cwd: &Path,
    ) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit.or(from_env) {
            if !path.exists() {
                return Err(Error::ConfigNotFound(path.display().to_string()));
            }
            return Ok((Config::load(path)?, Some(path.to_path_buf())));
        }

        let candidates = [
            Some(cwd.join(CONFIG_FILE_NAME)),
            dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE)),
        ];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                return Ok((Config::load(&path)?, Some(path)));
            }
        }

        Ok((Config::default(), None))
    }

    /// Rejects settings that would make the report meaningless.
    pub fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        if !(0.0..=1.0).contains(&s.closed_discount) {
            return Err(Error::Config(format!(
                "scoring.closed_discount must be between 0 and 1, got {}",
                s.closed_discount
            )));
        }
        if s.thresholds.medium <= 0.0 || s.thresholds.high < s.thresholds.medium {
            return Err(Error::Config(format!(
                "scoring.thresholds must satisfy 0 < medium <= high, got medium={} high={}",
                s.thresholds.medium, s.thresholds.high
            )));
        }
        if self.report.top_n == 0 {
            return Err(Error::Config("report.top_n must be at least 1".to_string()));
        }
        if self.fetch.page_size == 0 {
            return Err(Error::Config("fetch.page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn issues_path(&self) -> PathBuf {
        self.data_dir.join(&self.issues_file)
    }

    pub fn links_path(&self) -> PathBuf {
        self.data_dir.join(&self.links_file)
    }

    /// Renders the config as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
