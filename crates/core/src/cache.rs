// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-owned cache of a loaded [`Dataset`].
//!
//! The cache is keyed on each input file's modification time and length.
//! Any change (including a file appearing or disappearing) makes the next
//! [`DatasetCache::get`] reload both files.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use crate::error::Result;
use crate::loader::Dataset;

/// Observed state of one input file; `None` when the file is absent.
type FileStamp = Option<(SystemTime, u64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stamp {
    issues: FileStamp,
    links: FileStamp,
}

fn file_stamp(path: &Path) -> FileStamp {
    let meta = std::fs::metadata(path).ok()?;
    Some((meta.modified().ok()?, meta.len()))
}

#[derive(Debug)]
pub struct DatasetCache {
    issues_path: PathBuf,
    links_path: PathBuf,
    loaded: Option<(Stamp, Arc<Dataset>)>,
}

impl DatasetCache {
    pub fn new(issues_path: impl Into<PathBuf>, links_path: impl Into<PathBuf>) -> Self {
        DatasetCache {
            issues_path: issues_path.into(),
            links_path: links_path.into(),
            loaded: None,
        }
    }

    pub fn issues_path(&self) -> &Path {
        &self.issues_path
    }

    pub fn links_path(&self) -> &Path {
        &self.links_path
    }

    fn current_stamp(&self) -> Stamp {
        Stamp {
            issues: file_stamp(&self.issues_path),
            links: file_stamp(&self.links_path),
        }
    }

    /// True when nothing is cached or an input changed since the last load.
    pub fn is_stale(&self) -> bool {
        match &self.loaded {
            Some((stamp, _)) => *stamp != self.current_stamp(),
            None => true,
        }
    }

    /// Returns the cached dataset, reloading first if it is stale.
    pub fn get(&mut self) -> Result<Arc<Dataset>> {
        if let Some((stamp, dataset)) = &self.loaded {
            if *stamp == self.current_stamp() {
                return Ok(Arc::clone(dataset));
            }
        }
        self.load()
    }

    /// Reloads if stale. Returns whether a reload happened.
    ///
    /// A failed load leaves the cache empty, so the next call retries.
    pub fn refresh(&mut self) -> Result<bool> {
        if !self.is_stale() {
            return Ok(false);
        }
        self.load()?;
        Ok(true)
    }

    fn load(&mut self) -> Result<Arc<Dataset>> {
        self.loaded = None;
        let stamp = self.current_stamp();
        let dataset = Arc::new(Dataset::load(&self.issues_path, &self.links_path)?);
        debug!(
            issues = %self.issues_path.display(),
            links = %self.links_path.display(),
            "dataset cache reloaded"
        );
        self.loaded = Some((stamp, Arc::clone(&dataset)));
        Ok(dataset)
    }

    /// Drops the cached dataset; the next `get` reloads unconditionally.
    pub fn invalidate(&mut self) {
        self.loaded = None;
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
