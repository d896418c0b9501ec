// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        header("Options:")
    )
}

fn header(text: &str) -> String {
    if colors::should_colorize() {
        colors::header(text)
    } else {
        text.to_string()
    }
}

fn literal(text: &str) -> String {
    if colors::should_colorize() {
        colors::literal(text)
    } else {
        text.to_string()
    }
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_analysis}
  {report}      Show the ranked risk report
  {show}        Show the score breakdown for issues

{header_data}
  {fetch}       Download issues and extract links
  {extract}     Rebuild links from an issues file

{header_setup}
  {config}      Print the effective configuration
  {completion}  Generate shell completions
",
        header_analysis = header("Analysis:"),
        header_data = header("Data:"),
        header_setup = header("Setup:"),
        report = literal("report"),
        show = literal("show"),
        fetch = literal("fetch"),
        extract = literal("extract"),
        config = literal("config"),
        completion = literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  linkrisk fetch             Download the configured tracker search
  linkrisk report            Rank the riskiest issues
  linkrisk show <key>        Explain one issue's score",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
