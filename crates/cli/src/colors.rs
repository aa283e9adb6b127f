// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and listing output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;
use std::ops::Range;

use lt_core::Difficulty;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    pub const EASY: u8 = 78;
    pub const MEDIUM: u8 = 178;
    pub const HARD: u8 = 167;
    /// Search match highlight: pale yellow
    pub const MATCH: u8 = 229;
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Wrap `text` in a 256-color foreground escape.
fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

fn paint_if(enabled: bool, code: u8, text: &str) -> String {
    if enabled {
        paint(code, text)
    } else {
        text.to_string()
    }
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint_if(should_colorize(), codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint_if(should_colorize(), codes::LITERAL, text)
}

/// Apply context color (placeholders, hints) to text.
pub fn context(text: &str) -> String {
    paint_if(should_colorize(), codes::CONTEXT, text)
}

/// Dim secondary text such as ids and scores.
pub fn dim(text: &str, enabled: bool) -> String {
    paint_if(enabled, codes::CONTEXT, text)
}

/// Difficulty label in its traffic-light color.
pub fn difficulty(d: Difficulty, enabled: bool) -> String {
    let code = match d {
        Difficulty::Easy => codes::EASY,
        Difficulty::Medium => codes::MEDIUM,
        Difficulty::Hard => codes::HARD,
    };
    paint_if(enabled, code, d.as_str())
}

/// Color the given byte ranges of `text` as search matches.
///
/// Ranges must be sorted, non-overlapping and on char boundaries, as
/// produced by `lt_core::fuzzy::highlight_ranges`.
pub fn highlight(text: &str, ranges: &[Range<usize>], enabled: bool) -> String {
    if !enabled || ranges.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + ranges.len() * 16);
    let mut cursor = 0;
    for range in ranges {
        let (Some(before), Some(matched)) = (text.get(cursor..range.start), text.get(range.clone()))
        else {
            continue;
        };
        out.push_str(before);
        out.push_str(&paint(codes::MATCH, matched));
        cursor = range.end;
    }
    out.push_str(text.get(cursor..).unwrap_or_default());
    out
}

/// Colorize an examples help block.
///
/// Expects format like:
/// ```text
/// Examples:
///   lt add Arrays "Two Sum"    Description here
///
/// Keys:
///   Problem: <category-id>-<problem-id>
/// ```
///
/// Section headers get the header color, the command column the literal
/// color with quoted text and `<placeholders>` dimmed, and the value of
/// `Label: value` lines the literal color.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let lines: Vec<String> = text.lines().map(colorize_example_line).collect();
    lines.join("\n")
}

fn colorize_example_line(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    if trimmed.ends_with(':') && !trimmed.contains("  ") {
        return format!("{indent}{}", paint(codes::HEADER, trimmed));
    }
    if trimmed.starts_with("lt ") {
        let (cmd, desc) = match find_description_start(trimmed) {
            Some(end) => trimmed.split_at(end),
            None => (trimmed, ""),
        };
        return format!("{indent}{}{desc}", colorize_command(cmd));
    }
    if let Some((label, value)) = trimmed.split_once(": ") {
        return format!("{indent}{label}: {}", paint(codes::LITERAL, value));
    }
    line.to_string()
}

/// Colorize a command line: quoted strings and `<placeholders>` as context,
/// everything else as literal.
pub fn colorize_command(cmd: &str) -> String {
    let mut out = String::with_capacity(cmd.len() + 64);
    let mut rest = cmd;

    while !rest.is_empty() {
        let (close, at) = match rest.find(['"', '<']) {
            Some(at) if rest[at..].starts_with('"') => ('"', at),
            Some(at) => ('>', at),
            None => {
                out.push_str(&paint(codes::LITERAL, rest));
                break;
            }
        };
        if at > 0 {
            out.push_str(&paint(codes::LITERAL, &rest[..at]));
        }
        let end = rest[at + 1..]
            .find(close)
            .map_or(rest.len(), |i| at + 1 + i + 1);
        out.push_str(&paint(codes::CONTEXT, &rest[at..end]));
        rest = &rest[end..];
    }
    out
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    if line[start..].trim_start().is_empty() {
        None
    } else {
        Some(start)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
