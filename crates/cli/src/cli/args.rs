// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to keep problem
//! addressing and output selection identical across commands.

use clap::{Args, ValueEnum};

use super::non_empty_string;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output format selection.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// A problem addressed through its category.
#[derive(Args, Clone, Debug)]
pub struct ProblemRef {
    /// Category id or name
    #[arg(value_parser = non_empty_string)]
    pub category: String,

    /// Problem id or title
    #[arg(value_parser = non_empty_string)]
    pub problem: String,
}
