// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Paginated download of tracker issues.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use lk_core::jsonl::Writer;
use lk_core::{extract_file, SearchPage, SEARCH_FIELDS};

use crate::config::{Config, FetchConfig};
use crate::env;
use crate::error::{Error, Result};

/// One page of a tracker search.
pub trait SearchSource {
    fn page(&self, start: usize, page_size: usize) -> Result<SearchPage>;
}

/// Search over the tracker's REST API.
pub struct HttpSearch {
    agent: ureq::Agent,
    url: String,
    jql: String,
    token: Option<String>,
}

impl HttpSearch {
    pub fn new(fetch: &FetchConfig, token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(fetch.timeout_secs))
            .user_agent(concat!("linkrisk/", env!("CARGO_PKG_VERSION")))
            .build();
        HttpSearch {
            agent,
            url: fetch.search_url(),
            jql: fetch.jql.clone(),
            token,
        }
    }

    fn http_error(&self, reason: impl Into<String>) -> Error {
        Error::Http {
            url: self.url.clone(),
            reason: reason.into(),
        }
    }
}

impl SearchSource for HttpSearch {
    fn page(&self, start: usize, page_size: usize) -> Result<SearchPage> {
        let mut request = self
            .agent
            .get(&self.url)
            .query("jql", &self.jql)
            .query("startAt", &start.to_string())
            .query("maxResults", &page_size.to_string())
            .query("fields", &SEARCH_FIELDS.join(","))
            .set("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                return Err(self.http_error(format!("status {code} {}", response.status_text())))
            }
            Err(ureq::Error::Transport(t)) => return Err(self.http_error(t.to_string())),
        };
        response
            .into_json::<SearchPage>()
            .map_err(|e| self.http_error(format!("invalid response body: {e}")))
    }
}

/// Downloads every page into `writer`, pausing `delay` between pages.
/// Returns the number of issues written.
pub(crate) fn download(
    source: &impl SearchSource,
    page_size: usize,
    delay: Duration,
    writer: &mut Writer,
) -> Result<usize> {
    let mut start = 0;
    loop {
        let page = source.page(start, page_size)?;
        for issue in &page.issues {
            writer.write(issue)?;
        }
        info!(
            start,
            received = page.issues.len(),
            total = ?page.total,
            "fetched page"
        );
        match page.next_start(start, page_size) {
            Some(next) => {
                start = next;
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            None => break,
        }
    }
    Ok(writer.count())
}

/// Command-line overrides for the `[fetch]` section.
#[derive(Debug, Clone, Default)]
pub struct FetchOverrides {
    pub data_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub jql: Option<String>,
    pub page_size: Option<usize>,
}

impl FetchOverrides {
    /// Returns the effective `[fetch]` section and the config whose
    /// snapshot paths the download writes to.
    pub(crate) fn apply(self, config: &Config) -> (FetchConfig, Config) {
        let mut target = config.clone();
        if let Some(data_dir) = self.data_dir {
            target.data_dir = data_dir;
        }
        let mut fetch = config.fetch.clone();
        if let Some(base_url) = self.base_url {
            fetch.base_url = base_url;
        }
        if let Some(jql) = self.jql {
            fetch.jql = jql;
        }
        if let Some(page_size) = self.page_size {
            fetch.page_size = page_size;
        }
        (fetch, target)
    }
}

pub fn run(config: &Config, overrides: FetchOverrides) -> Result<()> {
    let (fetch, target) = overrides.apply(config);
    if fetch.base_url.trim().is_empty() {
        return Err(Error::FieldRequired {
            field: "fetch.base_url",
        });
    }
    let issues_path = target.issues_path();
    let links_path = target.links_path();

    let source = HttpSearch::new(&fetch, env::api_token());
    info!(url = %source.url, jql = %fetch.jql, "starting fetch");
    let (issues, links) = run_impl(&source, &fetch, &issues_path, &links_path)?;
    println!(
        "Fetched {issues} issues into {}; extracted {links} links into {}",
        issues_path.display(),
        links_path.display()
    );
    Ok(())
}

/// Downloads into `issues_path`, then rebuilds `links_path` from it.
pub(crate) fn run_impl(
    source: &impl SearchSource,
    fetch: &FetchConfig,
    issues_path: &Path,
    links_path: &Path,
) -> Result<(usize, usize)> {
    let mut writer = Writer::create(issues_path)?;
    download(
        source,
        fetch.page_size,
        Duration::from_millis(fetch.page_delay_ms),
        &mut writer,
    )?;
    let written = writer.finish()?;
    debug!(issues = written, path = %issues_path.display(), "issues written");

    let stats = extract_file(issues_path, links_path)?;
    Ok((written, stats.links))
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
