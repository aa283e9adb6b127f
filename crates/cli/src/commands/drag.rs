// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lt_core::{resolve_drag_end, DragEndpoint, DragOutcome};

use super::{category_name, open_tracker};
use crate::error::Result;
use crate::tracker::Tracker;

pub fn run(active: &str, over: Option<&str>) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    run_impl(&mut tracker, active, over)?;
    Ok(())
}

/// Internal implementation that accepts the tracker for testing.
pub(crate) fn run_impl(
    tracker: &mut Tracker,
    active: &str,
    over: Option<&str>,
) -> Result<DragOutcome> {
    let active: DragEndpoint = active.parse()?;
    let over: Option<DragEndpoint> = over.map(str::parse).transpose()?;
    tracing::debug!(%active, over = ?over, "drag end");

    let outcome = tracker.mutate(|c| Ok(resolve_drag_end(c, active, over)))?;
    match outcome {
        DragOutcome::CategoriesReordered => println!("Reordered categories"),
        DragOutcome::ProblemsReordered { category_id } => println!(
            "Reordered problems in {}",
            category_name(tracker.collection(), category_id)
        ),
        DragOutcome::Ignored(reason) => println!("Nothing changed: {}", reason),
    }
    Ok(outcome)
}

#[cfg(test)]
#[path = "drag_tests.rs"]
mod tests;
