// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::SyncError;

/// All possible errors that can occur in the ltrack library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'lt init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("category not found: '{0}'\n  hint: use a category id or its name (see 'lt list --all')")]
    UnknownCategory(String),

    #[error("ambiguous category '{key}' matches: {}", matches.join(", "))]
    AmbiguousCategory { key: String, matches: Vec<String> },

    #[error("problem not found: '{problem}' in '{category}'\n  hint: use a problem id or its title")]
    UnknownProblem { category: String, problem: String },

    #[error("unknown attribute '{attr}'\n  hint: valid attributes are: title, number, difficulty, notes")]
    UnknownAttribute { attr: String },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("export path cannot be empty")]
    ExportPathEmpty,

    #[error(transparent)]
    Core(#[from] lt_core::Error),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for ltrack operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
