// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lt-core operations.

use thiserror::Error;

use crate::problem::{CategoryId, ProblemId};

/// All possible errors that can occur in lt-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("a category named '{0}' already exists\n  hint: category names are compared case-insensitively")]
    DuplicateName(String),

    #[error("a problem titled '{title}' already exists in '{category}'\n  hint: titles are compared case-insensitively within a category")]
    DuplicateTitle { title: String, category: String },

    #[error("a problem numbered '{number}' already exists in '{category}'")]
    DuplicateNumber { number: String, category: String },

    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("problem not found: {category_id}/{problem_id}")]
    ProblemNotFound {
        category_id: CategoryId,
        problem_id: ProblemId,
    },

    #[error("invalid difficulty: '{0}'\n  hint: valid difficulties are: easy, medium, hard")]
    InvalidDifficulty(String),

    #[error("invalid drag key: '{0}'\n  hint: use <category-id> or <category-id>-<problem-id>")]
    InvalidDragKey(String),

    #[error("invalid import data: {0}")]
    InvalidImport(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
