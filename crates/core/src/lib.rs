// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lt-core: Domain library for the leettrack problem tracker
//!
//! This crate holds the in-memory collection of categories and problems and
//! every structural mutation on it. It performs no I/O: persistence, remote
//! sync, and presentation live in the `leettrack` CLI crate.

pub mod collection;
pub mod drag;
pub mod error;
pub mod fuzzy;
pub mod problem;
pub mod snapshot;
pub mod swipe;

pub use collection::{Collection, NewProblem};
pub use drag::{resolve_drag_end, DragEndpoint, DragOutcome, IgnoreReason};
pub use error::{Error, Result};
pub use fuzzy::{calculate_fuzzy_score, search_problems, FieldScores, SearchHit};
pub use problem::{Category, CategoryId, Difficulty, Problem, ProblemId, ProblemKey, ProblemPatch};
pub use snapshot::{ExportDocument, Snapshot};
pub use swipe::{SwipeChange, SwipeTracker};
