// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn missing_input_names_path_and_hint() {
    let err = Error::MissingInput {
        path: PathBuf::from("data/links.ndjson"),
    };
    let msg = err.to_string();
    assert!(msg.starts_with("input not found: data/links.ndjson"));
    assert!(msg.contains("hint: run 'linkrisk fetch'"));
}

#[test]
fn malformed_record_locates_line() {
    let err = Error::MalformedRecord {
        path: PathBuf::from("links.ndjson"),
        line: 7,
        reason: "missing field `type`".to_string(),
        content: "{\"source\":\"A-1\"}".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("links.ndjson:7"));
    assert!(msg.contains("missing field `type`"));
    assert!(msg.contains("{\"source\":\"A-1\"}"));
}

#[test]
fn empty_dataset_is_distinct_from_missing_input() {
    let empty = Error::EmptyDataset {
        path: PathBuf::from("links.ndjson"),
    };
    assert!(empty.to_string().starts_with("no link data in links.ndjson"));
    assert!(!matches!(empty, Error::MissingInput { .. }));
}

#[test]
fn no_data_classification() {
    assert!(Error::MissingInput {
        path: PathBuf::from("x")
    }
    .is_no_data());
    assert!(Error::EmptyDataset {
        path: PathBuf::from("x")
    }
    .is_no_data());
    assert!(!Error::MalformedRecord {
        path: PathBuf::from("x"),
        line: 1,
        reason: String::new(),
        content: String::new(),
    }
    .is_no_data());
    assert!(!Error::InvalidInput("bad".into()).is_no_data());
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io.into();
    assert!(err.to_string().starts_with("io error:"));
}
