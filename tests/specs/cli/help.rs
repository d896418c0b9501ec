// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for help output and shell completion.

#![allow(clippy::unwrap_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn top_level_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    linkrisk(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("extract"));
}

#[parameterized(
    report = { "report" },
    show = { "show" },
    fetch = { "fetch" },
)]
fn subcommand_help_has_examples(command: &str) {
    let temp = TempDir::new().unwrap();
    linkrisk(temp.path())
        .args([command, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Examples:"));
}

#[parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_scripts(shell: &str) {
    let temp = TempDir::new().unwrap();
    linkrisk(temp.path())
        .args(["completion", shell])
        .assert()
        .success()
        .stdout(predicate::str::contains("linkrisk"));
}
