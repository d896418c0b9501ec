// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loads the issues and links snapshot into validated in-memory maps.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::issue::{IssueMetadata, RawIssue};
use crate::jsonl;
use crate::link::{LinkCounts, LinkRecord};

/// Issue key to metadata.
pub type MetadataMap = HashMap<String, IssueMetadata>;

/// Reads issue metadata.
///
/// A missing file is not an error: every issue then scores with default
/// (open, unknown) metadata. A malformed line is an error.
pub fn load_issues(path: &Path) -> Result<MetadataMap> {
    let raw: Vec<RawIssue> = match jsonl::read_all(path) {
        Ok(raw) => raw,
        Err(Error::MissingInput { path }) => {
            warn!(path = %path.display(), "issues file not found, using default metadata");
            return Ok(MetadataMap::new());
        }
        Err(e) => return Err(e),
    };

    let metadata: MetadataMap = raw.into_iter().map(RawIssue::into_metadata).collect();
    debug!(path = %path.display(), issues = metadata.len(), "loaded issue metadata");
    Ok(metadata)
}

/// Reads link records. Absence of the file is [`Error::MissingInput`].
pub fn load_links(path: &Path) -> Result<Vec<LinkRecord>> {
    let links: Vec<LinkRecord> = jsonl::read_all(path)?;
    debug!(path = %path.display(), links = links.len(), "loaded link records");
    Ok(links)
}

/// A loaded, validated snapshot.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub metadata: MetadataMap,
    pub links: Vec<LinkRecord>,
    pub counts: LinkCounts,
}

impl Dataset {
    /// Loads both files and tallies link counts.
    ///
    /// Fails with [`Error::MissingInput`] when the links file is absent and
    /// with [`Error::EmptyDataset`] when it holds no links.
    pub fn load(issues_path: &Path, links_path: &Path) -> Result<Self> {
        let metadata = load_issues(issues_path)?;
        let links = load_links(links_path)?;
        let dataset = Dataset::from_parts(metadata, links);
        if dataset.counts.is_empty() {
            return Err(Error::EmptyDataset {
                path: links_path.to_path_buf(),
            });
        }
        Ok(dataset)
    }

    /// Assembles a dataset from already-parsed records.
    pub fn from_parts(metadata: MetadataMap, links: Vec<LinkRecord>) -> Self {
        let counts = LinkCounts::from_links(&links);
        Dataset {
            metadata,
            links,
            counts,
        }
    }

    /// Metadata for `key`, or defaults when the issue was not exported.
    pub fn metadata_for(&self, key: &str) -> IssueMetadata {
        self.metadata.get(key).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
