// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use lt_core::snapshot::export_filename;
use lt_core::ExportDocument;

use super::open_tracker;
use crate::error::{Error, Result};
use crate::tracker::Tracker;

pub fn run(path: Option<&str>) -> Result<()> {
    let (tracker, _, _) = open_tracker()?;
    let now = Utc::now();
    let path = match path {
        Some(p) if p.trim().is_empty() => return Err(Error::ExportPathEmpty),
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(export_filename(now)),
    };
    run_impl(&tracker, &path, now)
}

/// Internal implementation that accepts the tracker and clock for testing.
pub(crate) fn run_impl(tracker: &Tracker, path: &Path, now: DateTime<Utc>) -> Result<()> {
    let collection = tracker.collection();
    let document = ExportDocument::new(collection.to_snapshot(), now);
    fs::write(path, document.to_json_pretty()?)?;

    println!(
        "Exported {} categories ({} problems) to {}",
        collection.categories().len(),
        collection.problem_count(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
