// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lt_core::search_problems;

use super::open_tracker;
use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Config;
use crate::display::{search_json, search_line};
use crate::error::Result;
use crate::tracker::Tracker;

pub fn run(query: &str, threshold: Option<f64>, output: OutputFormat) -> Result<()> {
    let (tracker, config, _) = open_tracker()?;
    let out = run_impl(
        &tracker,
        &config,
        query,
        threshold,
        output,
        colors::should_colorize(),
    )?;
    println!("{}", out);
    Ok(())
}

/// Internal implementation that accepts tracker/config for testing.
pub(crate) fn run_impl(
    tracker: &Tracker,
    config: &Config,
    query: &str,
    threshold: Option<f64>,
    output: OutputFormat,
    color: bool,
) -> Result<String> {
    let threshold = threshold.unwrap_or(config.search.threshold);
    let hits = search_problems(tracker.collection().categories(), query, threshold);
    tracing::debug!(query, threshold, hits = hits.len(), "search");

    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&search_json(&hits))?),
        OutputFormat::Text if hits.is_empty() => Ok(format!("No problems match '{}'", query.trim())),
        OutputFormat::Text => {
            let lines: Vec<String> = hits
                .iter()
                .map(|hit| search_line(hit, query.trim(), color))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
