// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use lt_core::Difficulty;

pub use args::{OutputArgs, OutputFormat, ProblemRef};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a difficulty name, ignoring case.
fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    s.parse::<Difficulty>()
        .map_err(|_| "expected one of: easy, medium, hard".to_string())
}

/// Parse a search threshold between 0 and the best weighted score.
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err("must be a non-negative number".to_string())
    }
}

#[derive(Parser)]
#[command(name = "lt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Track LeetCode practice problems by category, with GitHub Gist sync")]
#[command(
    long_about = "Track LeetCode practice problems by category, with GitHub Gist sync.\n\n\
    Problems live in ordered categories stored under .leettrack/ and can be\n\
    mirrored to a private gist to move between machines."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if lt was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Problems
    // ─────────────────────────────────────────────────────────────────────────
    /// Add a problem to a category
    #[command(after_help = colors::examples("\
Examples:
  lt add Arrays \"Two Sum\"                  Add a problem with default difficulty
  lt add Arrays \"Two Sum\" -n 1 -D easy     Add with number and difficulty
  lt add Graphs \"Course Schedule\" --notes \"topological sort\""))]
    Add {
        /// Category id or name
        #[arg(value_parser = non_empty_string)]
        category: String,

        /// Problem title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// LeetCode problem number
        #[arg(long, short = 'n')]
        number: Option<String>,

        /// Difficulty (easy, medium, hard)
        #[arg(long, short = 'D', value_parser = parse_difficulty)]
        difficulty: Option<Difficulty>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove a problem
    #[command(arg_required_else_help = true)]
    Rm {
        #[command(flatten)]
        target: ProblemRef,
    },

    /// Edit a problem's properties
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  lt edit Arrays \"Two Sum\" title \"2Sum\"    Rename a problem
  lt edit Arrays 1700000000000 number 1    Set the problem number
  lt edit Arrays \"Two Sum\" difficulty hard Change difficulty
  lt edit Arrays \"Two Sum\" notes \"\"        Clear notes

Attributes:
  Names: title, number, difficulty, notes")
    )]
    Edit {
        #[command(flatten)]
        target: ProblemRef,

        /// Attribute to change (title, number, difficulty, notes)
        attr: String,

        /// New value
        value: String,
    },

    /// Toggle a problem between solved and unsolved
    #[command(arg_required_else_help = true)]
    Solve {
        #[command(flatten)]
        target: ProblemRef,
    },

    /// Move a problem into the position of another in the same category
    #[command(arg_required_else_help = true)]
    Reorder {
        /// Category id or name
        #[arg(value_parser = non_empty_string)]
        category: String,

        /// Problem to move
        #[arg(value_parser = non_empty_string)]
        dragged: String,

        /// Problem whose position it takes
        #[arg(value_parser = non_empty_string)]
        target: String,
    },

    /// Move a problem to the end of another category
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  lt move \"Two Sum\" Arrays Hashing       Move between categories by name")
    )]
    Move {
        /// Problem id or title
        #[arg(value_parser = non_empty_string)]
        problem: String,

        /// Category it is in now
        #[arg(value_parser = non_empty_string)]
        from: String,

        /// Category to move it to
        #[arg(value_parser = non_empty_string)]
        to: String,
    },

    /// Apply a completed drag gesture using raw item keys
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  lt drag 17 42                     Drop category 17 onto category 42
  lt drag 17-3 17-5                 Drop problem 3 onto problem 5 in category 17
  lt drag 17-3                      Drop outside any target

Keys:
  Category: <category-id>
  Problem: <category-id>-<problem-id>")
    )]
    Drag {
        /// Key of the dragged item
        #[arg(allow_hyphen_values = true)]
        active: String,

        /// Key of the item it was dropped on
        #[arg(allow_hyphen_values = true)]
        over: Option<String>,
    },

    /// List categories and their problems
    #[command(after_help = colors::examples("\
Examples:
  lt list                           List problems, hiding collapsed categories
  lt list --all                     Include problems of collapsed categories
  lt list -o json                   Output as JSON"))]
    List {
        /// Show problems of collapsed categories too
        #[arg(long, short = 'a')]
        all: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fuzzy search problems
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  lt search \"two sum\"                Search titles, numbers, notes and more
  lt search dp -t 0.5               Only strong matches
  lt search graph -o json           Include per-field scores")
    )]
    Search {
        /// Search query
        #[arg(value_parser = non_empty_string)]
        query: String,

        /// Minimum score (defaults to the configured threshold)
        #[arg(long, short = 't', value_parser = parse_threshold)]
        threshold: Option<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Pick a random problem
    Random {
        /// Only consider unsolved problems
        #[arg(long, short = 'u')]
        unsolved: bool,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Categories
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommand),

    // ─────────────────────────────────────────────────────────────────────────
    // Setup & Data
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize a tracker in the current directory (or specified path)
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Export all data to a JSON file
    #[command(after_help = colors::examples("\
Examples:
  lt export                         Write leetcode-tracker-<date>.json
  lt export backup.json             Write to a specific file"))]
    Export {
        /// Output file path
        #[arg(value_parser = non_empty_string)]
        path: Option<String>,
    },

    /// Replace all data with the contents of an export file
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  lt import backup.json             Import an export file
  lt import -                       Import from stdin")
    )]
    Import {
        /// Input file (use '-' for stdin)
        #[arg(value_parser = non_empty_string)]
        path: String,
    },

    /// Sync with a GitHub gist
    #[command(subcommand)]
    Remote(RemoteCommand),

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  lt completion bash > ~/.local/share/bash-completion/completions/lt
  lt completion zsh > ~/.zfunc/_lt")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Category management commands.
#[derive(Subcommand)]
pub enum CategoryCommand {
    /// Create a category
    Add {
        /// Category name
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Description
        #[arg(long, short = 'd', default_value = "")]
        description: String,
    },

    /// Delete a category and all of its problems
    Rm {
        /// Category id or name
        #[arg(value_parser = non_empty_string)]
        category: String,
    },

    /// Rename a category
    Edit {
        /// Category id or name
        #[arg(value_parser = non_empty_string)]
        category: String,

        /// New name
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// New description (unchanged when omitted)
        #[arg(long, short = 'd', default_value = "")]
        description: String,
    },

    /// Collapse or expand a category in listings
    Collapse {
        /// Category id or name
        #[arg(value_parser = non_empty_string)]
        category: String,
    },

    /// Move a category into the position of another
    Reorder {
        /// Category to move
        #[arg(value_parser = non_empty_string)]
        dragged: String,

        /// Category whose position it takes
        #[arg(value_parser = non_empty_string)]
        target: String,
    },
}

/// Gist sync commands.
#[derive(Subcommand)]
pub enum RemoteCommand {
    /// Store a GitHub token with gist scope
    Auth {
        /// Personal access token (classic or fine-grained)
        #[arg(value_parser = non_empty_string)]
        token: String,
    },

    /// Link an existing gist and load its data
    Link {
        /// Gist id
        #[arg(value_parser = non_empty_string)]
        gist_id: String,
    },

    /// List tracker gists owned by the token holder
    List,

    /// Push local data to the linked gist
    Save,

    /// Replace local data with the linked gist's contents
    Load,

    /// Show token and gist link status
    Status,

    /// Forget the token and gist link
    Disconnect,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
