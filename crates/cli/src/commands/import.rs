// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::io::Read;

use lt_core::Snapshot;

use super::open_tracker;
use crate::error::Result;
use crate::tracker::Tracker;

pub fn run(path: &str) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    run_impl(&mut tracker, &content)
}

/// Replace the collection with an export document or a legacy category list.
///
/// Nothing changes when the content cannot be parsed.
pub(crate) fn run_impl(tracker: &mut Tracker, content: &str) -> Result<()> {
    let snapshot = Snapshot::parse(content)?;
    tracker.install(snapshot);

    let collection = tracker.collection();
    println!(
        "Imported {} categories ({} problems)",
        collection.categories().len(),
        collection.problem_count()
    );
    Ok(())
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
