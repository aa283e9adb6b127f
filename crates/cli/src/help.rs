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

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
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
        colors::header("Options:")
    )
}

/// One aligned `name  description` row.
fn row(name: &str, description: &str) -> String {
    format!("  {}{}{}", colors::literal(name), " ".repeat(12 - name.len().min(11)), description)
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let problems = [
        ("add", "Add a problem to a category"),
        ("rm", "Remove a problem"),
        ("edit", "Edit a problem's properties"),
        ("solve", "Toggle solved"),
        ("reorder", "Reorder problems within a category"),
        ("move", "Move a problem to another category"),
        ("drag", "Apply a drag gesture by item keys"),
        ("list", "List categories and problems"),
        ("search", "Fuzzy search problems"),
        ("random", "Pick a random problem"),
        ("category", "Add, rename, collapse, reorder categories"),
    ];
    let setup = [
        ("init", "Initialize a tracker"),
        ("export", "Export data to JSON"),
        ("import", "Import data from JSON"),
        ("remote", "Sync with a GitHub gist"),
        ("completion", "Generate shell completions"),
    ];

    let mut lines = vec![colors::header("Problems:")];
    lines.extend(problems.iter().map(|(n, d)| row(n, d)));
    lines.push(String::new());
    lines.push(colors::header("Setup & Data:"));
    lines.extend(setup.iter().map(|(n, d)| row(n, d)));
    lines.join("\n")
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  lt init                            Initialize tracker
  lt category add Arrays             Create a category
  lt add Arrays \"Two Sum\" -n 1       Add a problem
  lt solve Arrays \"Two Sum\"          Mark it solved
  lt list                            Show progress",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
