// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) file utilities.
//!
//! Reading is strict: every non-empty line must decode into the target type,
//! and a failing line is reported with its 1-based line number and content.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Longest record excerpt carried in a [`Error::MalformedRecord`].
const EXCERPT_LEN: usize = 200;

/// Reads all records from a JSONL file.
///
/// Skips empty lines. A missing file is [`Error::MissingInput`]; callers that
/// can recover from absence match on it.
pub fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::MissingInput {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: T = serde_json::from_str(&line).map_err(|e| Error::MalformedRecord {
            path: path.to_path_buf(),
            line: idx + 1,
            reason: e.to_string(),
            content: excerpt(&line),
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Writes all records to a JSONL file, replacing existing content.
pub fn write_all<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut writer = Writer::create(path)?;
    for record in records {
        writer.write(record)?;
    }
    writer.finish()?;
    Ok(())
}

/// Incremental JSONL writer for output produced page by page.
///
/// Records go to a `<name>.tmp` sibling that replaces `path` only when
/// [`Writer::finish`] succeeds. A writer dropped before then removes its
/// temp file and leaves any existing `path` untouched.
pub struct Writer {
    path: PathBuf,
    tmp_path: PathBuf,
    inner: BufWriter<File>,
    count: usize,
    finished: bool,
}

impl Writer {
    /// Starts replacing the file at `path`, creating parent dirs.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = tmp_sibling(path);
        let file = File::create(&tmp_path)?;
        Ok(Writer {
            path: path.to_path_buf(),
            tmp_path,
            inner: BufWriter::new(file),
            count: 0,
            finished: false,
        })
    }

    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let json = serde_json::to_string(record)?;
        writeln!(self.inner, "{json}")?;
        self.count += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and fsyncs the temp file, then renames it over `path`.
    /// Returns the record count.
    pub fn finish(mut self) -> Result<usize> {
        self.inner.flush()?;
        self.inner.get_ref().sync_all()?;
        std::fs::rename(&self.tmp_path, &self.path)?;
        self.finished = true;
        Ok(self.count)
    }
}

impl Drop for Writer {
    fn drop(&mut self) {
        if !self.finished {
            let _ = std::fs::remove_file(&self.tmp_path);
        }
    }
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn excerpt(line: &str) -> String {
    if line.len() <= EXCERPT_LEN {
        return line.to_string();
    }
    let mut end = EXCERPT_LEN;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &line[..end])
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
