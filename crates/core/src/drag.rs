// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drag-end resolution.
//!
//! A finished drag gesture yields an `(active, over)` pair of endpoints. Each
//! endpoint is parsed once into a [`DragEndpoint`] at the boundary and then
//! dispatched to exactly one collection operation. Problems may only be
//! reordered within their own category; moving between categories goes
//! through [`Collection::move_problem`] instead.

use std::fmt;
use std::str::FromStr;

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::problem::{CategoryId, ProblemId, ProblemKey};

/// One end of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEndpoint {
    /// A whole category.
    Category(CategoryId),
    /// A single problem, addressed with its owning category.
    Problem(ProblemKey),
}

impl DragEndpoint {
    pub fn category(id: CategoryId) -> Self {
        DragEndpoint::Category(id)
    }

    pub fn problem(category_id: CategoryId, problem_id: ProblemId) -> Self {
        DragEndpoint::Problem(ProblemKey::new(category_id, problem_id))
    }
}

impl fmt::Display for DragEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragEndpoint::Category(id) => write!(f, "{}", id),
            DragEndpoint::Problem(key) => write!(f, "{}", key),
        }
    }
}

impl FromStr for DragEndpoint {
    type Err = Error;

    /// Parses `<category-id>` or `<category-id>-<problem-id>`. A colon is
    /// accepted in place of the dash.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || Error::InvalidDragKey(s.to_string());
        let parse_id = |part: &str| part.trim().parse::<i64>().map_err(|_| invalid());

        // A leading '-' is the sign of the category id.
        let separator = trimmed
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-' || c == ':')
            .map(|(i, _)| i);
        match separator {
            None => Ok(DragEndpoint::Category(parse_id(trimmed)?)),
            Some(i) => Ok(DragEndpoint::problem(
                parse_id(&trimmed[..i])?,
                parse_id(&trimmed[i + 1..])?,
            )),
        }
    }
}

/// Why a drag gesture changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Dropped outside any target.
    NoTarget,
    /// Dropped onto itself.
    SameItem,
    /// A category dropped on a problem or the reverse.
    MixedKinds,
    /// A problem dropped on a problem of another category.
    CrossCategory,
    /// One of the endpoints no longer exists.
    Missing,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IgnoreReason::NoTarget => "no drop target",
            IgnoreReason::SameItem => "dropped onto itself",
            IgnoreReason::MixedKinds => "category and problem cannot swap places",
            IgnoreReason::CrossCategory => "problems only reorder within their category",
            IgnoreReason::Missing => "item no longer exists",
        };
        f.write_str(s)
    }
}

/// Result of resolving a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    CategoriesReordered,
    ProblemsReordered { category_id: CategoryId },
    Ignored(IgnoreReason),
}

impl DragOutcome {
    /// True when the collection was modified.
    pub fn changed(&self) -> bool {
        !matches!(self, DragOutcome::Ignored(_))
    }
}

/// Applies a completed drag gesture to the collection.
pub fn resolve_drag_end(
    collection: &mut Collection,
    active: DragEndpoint,
    over: Option<DragEndpoint>,
) -> DragOutcome {
    let Some(over) = over else {
        return DragOutcome::Ignored(IgnoreReason::NoTarget);
    };
    if active == over {
        return DragOutcome::Ignored(IgnoreReason::SameItem);
    }

    match (active, over) {
        (DragEndpoint::Category(dragged), DragEndpoint::Category(target)) => {
            if collection.reorder_categories(dragged, target) {
                DragOutcome::CategoriesReordered
            } else {
                DragOutcome::Ignored(IgnoreReason::Missing)
            }
        }
        (DragEndpoint::Problem(dragged), DragEndpoint::Problem(target)) => {
            if dragged.category_id != target.category_id {
                return DragOutcome::Ignored(IgnoreReason::CrossCategory);
            }
            let category_id = dragged.category_id;
            if collection.reorder_problems(category_id, dragged.problem_id, target.problem_id) {
                DragOutcome::ProblemsReordered { category_id }
            } else {
                DragOutcome::Ignored(IgnoreReason::Missing)
            }
        }
        _ => DragOutcome::Ignored(IgnoreReason::MixedKinds),
    }
}

#[cfg(test)]
#[path = "drag_tests.rs"]
mod tests;
