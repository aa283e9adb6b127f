// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::open_tracker;
use crate::cli::OutputFormat;
use crate::colors;
use crate::display::{collection_json, collection_text};
use crate::error::Result;
use crate::tracker::Tracker;

pub fn run(all: bool, output: OutputFormat) -> Result<()> {
    let (tracker, _, _) = open_tracker()?;
    let out = run_impl(&tracker, all, output, colors::should_colorize())?;
    println!("{}", out);
    Ok(())
}

/// Internal implementation that accepts the tracker for testing.
pub(crate) fn run_impl(
    tracker: &Tracker,
    all: bool,
    output: OutputFormat,
    color: bool,
) -> Result<String> {
    let collection = tracker.collection();
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&collection_json(
            collection, all,
        ))?),
        OutputFormat::Text if collection.is_empty() => {
            Ok("No categories yet. Create one with: lt category add <name>".to_string())
        }
        OutputFormat::Text => Ok(collection_text(collection, all, color)),
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
