// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lk-core operations.
//!
//! Only the load phase raises domain errors. Scoring and report assembly
//! work on validated in-memory data and never fail.

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in lk-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input not found: {}\n  hint: run 'linkrisk fetch' to download tracker data first", path.display())]
    MissingInput { path: PathBuf },

    #[error("malformed record at {}:{line}: {reason}\n  record: {content}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
        content: String,
    },

    #[error("no link data in {}\n  hint: run 'linkrisk fetch' to download tracker data first", path.display())]
    EmptyDataset { path: PathBuf },

    #[error("{0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for conditions caused by absent or empty input data,
    /// as opposed to data that is present but broken.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Error::MissingInput { .. } | Error::EmptyDataset { .. })
    }
}

/// A specialized Result type for lk-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
