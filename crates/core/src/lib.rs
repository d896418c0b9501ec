// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lk-core: Link-based risk scoring for issue tracker snapshots
//!
//! This crate turns an exported snapshot (issue metadata plus directed
//! issue links, both JSON Lines) into a ranked list of at-risk issues with
//! an executive narrative. It performs no terminal or network I/O.
//!
//! ```rust,ignore
//! use lk_core::{Dataset, Report, ReportConfig, ScoringConfig};
//!
//! let dataset = Dataset::load(Path::new("issues.ndjson"), Path::new("links.ndjson"))?;
//! let report = Report::generate(&dataset, &ScoringConfig::default(), &ReportConfig::default(), None);
//! for row in report.top() {
//!     println!("{} {:.2} {}", row.issue, row.risk_index, row.severity);
//! }
//! ```

pub mod cache;
pub mod error;
pub mod extract;
pub mod graph;
pub mod issue;
pub mod jsonl;
pub mod link;
pub mod loader;
pub mod report;
pub mod score;
pub mod trend;

pub use cache::DatasetCache;
pub use error::{Error, Result};
pub use extract::{extract_file, extract_links, ExtractStats, SearchPage, SEARCH_FIELDS};
pub use graph::DependencyGraph;
pub use issue::{IssueMetadata, RawIssue};
pub use link::{Direction, LinkCounts, LinkRecord};
pub use loader::{Dataset, MetadataMap};
pub use report::{Narrative, Report, ReportConfig, Summary};
pub use score::{
    score_dataset, score_issue, Breakdown, Category, ScoredIssue, ScoringConfig, Severity,
    Signals, Thresholds, Weights,
};
pub use trend::{Baseline, Trend};
