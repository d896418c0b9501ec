// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the lkrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] lk_core::Error),

    #[error("issue has no recorded risk: {0}\n  hint: only issues with at least one scored link can be shown")]
    UnknownIssue(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("http request to {url} failed: {reason}")]
    Http { url: String, reason: String },

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the run found nothing to analyse, as opposed to failing.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Error::Core(e) if e.is_no_data())
    }
}

/// A specialized Result type for lkrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
