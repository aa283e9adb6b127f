// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod category;
pub mod drag;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod problem;
pub mod random;
pub mod remote;
pub mod search;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::PathBuf;

use lt_core::{Category, CategoryId, Collection, ProblemId};

use crate::config::{find_work_dir, Config};
use crate::error::{Error, Result};
use crate::storage::LocalStore;
use crate::tracker::Tracker;

/// Helper to open the tracker from the current context.
pub fn open_tracker() -> Result<(Tracker, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let tracker = Tracker::open(LocalStore::new(&work_dir));
    Ok((tracker, config, work_dir))
}

/// Resolve a category by id, exact name, or unique name prefix.
///
/// Names compare case-insensitively.
pub fn resolve_category(collection: &Collection, key: &str) -> Result<CategoryId> {
    let key = key.trim();
    if let Ok(id) = key.parse::<CategoryId>() {
        if collection.category(id).is_some() {
            return Ok(id);
        }
    }
    if let Some(category) = collection.category_by_name(key) {
        return Ok(category.id);
    }

    let prefix = key.to_lowercase();
    let matches: Vec<&Category> = collection
        .categories()
        .iter()
        .filter(|c| c.name.to_lowercase().starts_with(&prefix))
        .collect();
    match matches.as_slice() {
        [only] => Ok(only.id),
        [] => Err(Error::UnknownCategory(key.to_string())),
        many => Err(Error::AmbiguousCategory {
            key: key.to_string(),
            matches: many.iter().map(|c| c.name.clone()).collect(),
        }),
    }
}

/// Resolve a problem inside `category` by id, title, or number.
pub fn resolve_problem(category: &Category, key: &str) -> Result<ProblemId> {
    let key = key.trim();
    if let Ok(id) = key.parse::<ProblemId>() {
        if category.problem(id).is_some() {
            return Ok(id);
        }
    }
    category
        .problems
        .iter()
        .find(|p| p.has_title(key))
        .or_else(|| category.problems.iter().find(|p| p.has_number(key)))
        .map(|p| p.id)
        .ok_or_else(|| Error::UnknownProblem {
            category: category.name.clone(),
            problem: key.to_string(),
        })
}

/// Resolve a `(category, problem)` pair in one step.
pub fn resolve_target(
    collection: &Collection,
    category: &str,
    problem: &str,
) -> Result<(CategoryId, ProblemId)> {
    let category_id = resolve_category(collection, category)?;
    let category = collection
        .category(category_id)
        .ok_or_else(|| Error::UnknownCategory(category.to_string()))?;
    Ok((category_id, resolve_problem(category, problem)?))
}

/// Name of a category for messages, falling back to its id.
pub(crate) fn category_name(collection: &Collection, id: CategoryId) -> String {
    collection
        .category(id)
        .map_or_else(|| id.to_string(), |c| c.name.clone())
}
