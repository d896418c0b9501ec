// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;

fn render(config: &Config, source: Option<&Path>) -> String {
    let mut out = Vec::new();
    run_impl(&mut out, config, source).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn defaults_are_labelled() {
    let text = render(&Config::default(), None);
    assert!(text.starts_with("# built-in defaults\n"));
    assert!(text.contains("data_dir = \"data\""));
    assert!(text.contains("[scoring.weights]"));
    assert!(text.contains("[fetch]"));
}

#[test]
fn output_parses_back_to_the_same_config() {
    let mut config = Config::default();
    config.report.top_n = 7;
    config.scoring.closed_discount = 0.5;
    let source = PathBuf::from("/etc/linkrisk.toml");

    let text = render(&config, Some(&source));
    assert!(text.starts_with("# loaded from /etc/linkrisk.toml\n"));
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
