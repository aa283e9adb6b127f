// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lt_core::ProblemKey;
use rand::Rng;

use super::open_tracker;
use crate::colors;
use crate::display::problem_detail;
use crate::error::Result;
use crate::tracker::Tracker;

pub fn run(unsolved: bool) -> Result<()> {
    let (tracker, _, _) = open_tracker()?;
    run_impl(&tracker, &mut rand::thread_rng(), unsolved, colors::should_colorize());
    Ok(())
}

/// Internal implementation that accepts the tracker and rng for testing.
pub(crate) fn run_impl<R: Rng + ?Sized>(
    tracker: &Tracker,
    rng: &mut R,
    unsolved: bool,
    color: bool,
) -> Option<ProblemKey> {
    match tracker.collection().random_problem(rng, unsolved) {
        Some((category, problem)) => {
            println!("{}", problem_detail(category, problem, color));
            Some(ProblemKey::new(category.id, problem.id))
        }
        None if unsolved => {
            println!("No unsolved problems left");
            None
        }
        None => {
            println!("No problems yet");
            None
        }
    }
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod tests;
