// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered collection of categories and their problems.
//!
//! [`Collection`] owns the two-level tree and is the only place it is
//! mutated. Every operation either applies completely or leaves the tree
//! untouched:
//!
//! - Category names are unique (case-insensitive) across the collection.
//! - Problem titles are unique (case-insensitive) within a category, and
//!   non-empty problem numbers are unique within a category.
//! - Reordering moves one element and keeps the relative order of all others.

use chrono::{DateTime, Utc};
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::problem::{
    next_id, Category, CategoryId, Difficulty, Problem, ProblemId, ProblemKey, ProblemPatch,
};
use crate::snapshot::Snapshot;

/// Input for [`Collection::add_problem`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProblem {
    pub title: String,
    pub number: String,
    pub difficulty: Difficulty,
    pub notes: String,
}

impl NewProblem {
    pub fn titled(title: impl Into<String>) -> Self {
        NewProblem {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// The tracker's categories plus the set of collapsed category ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    categories: Vec<Category>,
    collapsed: Vec<CategoryId>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(categories: Vec<Category>, collapsed: Vec<CategoryId>) -> Self {
        Collection {
            categories,
            collapsed,
        }
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::from_parts(snapshot.categories, snapshot.collapsed_categories)
    }

    /// Copies the current state into a serializable snapshot.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            categories: self.categories.clone(),
            collapsed_categories: self.collapsed.clone(),
        }
    }

    /// Replaces the whole tree, as done after a remote load or an import.
    pub fn replace(&mut self, snapshot: Snapshot) {
        *self = Self::from_snapshot(snapshot);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn collapsed(&self) -> &[CategoryId] {
        &self.collapsed
    }

    pub fn is_collapsed(&self, id: CategoryId) -> bool {
        self.collapsed.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Case-insensitive lookup by name.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        let name = name.trim();
        self.categories.iter().find(|c| c.has_name(name))
    }

    pub fn problem(&self, key: ProblemKey) -> Option<&Problem> {
        self.category(key.category_id)?.problem(key.problem_id)
    }

    /// All problems in display order, paired with their category.
    pub fn problems(&self) -> impl Iterator<Item = (&Category, &Problem)> {
        self.categories
            .iter()
            .flat_map(|c| c.problems.iter().map(move |p| (c, p)))
    }

    pub fn problem_count(&self) -> usize {
        self.categories.iter().map(|c| c.problems.len()).sum()
    }

    fn index_of(&self, id: CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    fn category_mut(&mut self, id: CategoryId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    fn next_category_id(&self, now_ms: i64) -> CategoryId {
        let ids: Vec<CategoryId> = self.categories.iter().map(|c| c.id).collect();
        next_id(&ids, now_ms)
    }

    /// Appends a new, empty category.
    ///
    /// Returns `Ok(None)` without changing anything when the trimmed name is
    /// empty.
    pub fn add_category(
        &mut self,
        name: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<CategoryId>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        if self.categories.iter().any(|c| c.has_name(name)) {
            return Err(Error::DuplicateName(name.to_string()));
        }

        let id = self.next_category_id(now.timestamp_millis());
        self.categories
            .push(Category::new(id, name, description.trim()));
        Ok(Some(id))
    }

    /// Removes a category and every problem in it. Returns false if absent.
    pub fn delete_category(&mut self, id: CategoryId) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        self.collapsed.retain(|&c| c != id);
        self.categories.len() != before
    }

    /// Renames a category and optionally replaces its description.
    ///
    /// An empty description keeps the current one. A name already used by
    /// another category is rejected.
    pub fn update_category(&mut self, id: CategoryId, name: &str, description: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() || self.category(id).is_none() {
            return Ok(false);
        }
        if self.categories.iter().any(|c| c.id != id && c.has_name(name)) {
            return Err(Error::DuplicateName(name.to_string()));
        }

        let Some(category) = self.category_mut(id) else {
            return Ok(false);
        };
        category.name = name.to_string();
        let description = description.trim();
        if !description.is_empty() {
            category.description = description.to_string();
        }
        Ok(true)
    }

    /// Flips the collapsed flag of a category and returns the new state.
    pub fn toggle_category_collapsed(&mut self, id: CategoryId) -> bool {
        if let Some(pos) = self.collapsed.iter().position(|&c| c == id) {
            self.collapsed.remove(pos);
            false
        } else {
            self.collapsed.push(id);
            true
        }
    }

    /// Appends a new unsolved problem to a category.
    ///
    /// Returns `Ok(None)` when the trimmed title is empty or the category
    /// does not exist.
    pub fn add_problem(
        &mut self,
        category_id: CategoryId,
        new: NewProblem,
        now: DateTime<Utc>,
    ) -> Result<Option<ProblemId>> {
        let title = new.title.trim();
        if title.is_empty() {
            return Ok(None);
        }
        let Some(category) = self.category_mut(category_id) else {
            return Ok(None);
        };

        let number = new.number.trim();
        category.check_unique(title, number, None)?;

        let id = category.next_problem_id(now.timestamp_millis());
        category.problems.push(Problem {
            id,
            title: title.to_string(),
            number: number.to_string(),
            difficulty: new.difficulty,
            notes: new.notes.trim().to_string(),
            solved: false,
            solved_times: 0,
            solved_at: now,
        });
        Ok(Some(id))
    }

    /// Removes a problem from its category. Returns false if absent.
    pub fn delete_problem(&mut self, category_id: CategoryId, problem_id: ProblemId) -> bool {
        let Some(category) = self.category_mut(category_id) else {
            return false;
        };
        let before = category.problems.len();
        category.problems.retain(|p| p.id != problem_id);
        category.problems.len() != before
    }

    /// Merges `patch` into an existing problem.
    ///
    /// A blank title in the patch keeps the current title. The resulting title
    /// and number must stay unique among the problem's siblings.
    pub fn update_problem(
        &mut self,
        category_id: CategoryId,
        problem_id: ProblemId,
        patch: ProblemPatch,
    ) -> Result<bool> {
        let Some(category) = self.category_mut(category_id) else {
            return Ok(false);
        };
        let Some(current) = category.problem(problem_id) else {
            return Ok(false);
        };

        let title = match patch.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => current.title.clone(),
        };
        let number = match patch.number.as_deref() {
            Some(n) => n.trim().to_string(),
            None => current.number.clone(),
        };
        category.check_unique(&title, &number, Some(problem_id))?;

        let Some(problem) = category.problem_mut(problem_id) else {
            return Ok(false);
        };
        problem.title = title;
        problem.number = number;
        if let Some(difficulty) = patch.difficulty {
            problem.difficulty = difficulty;
        }
        if let Some(notes) = patch.notes {
            problem.notes = notes.trim().to_string();
        }
        Ok(true)
    }

    /// Flips a problem's solved flag. Returns the new flag, or `None` if absent.
    pub fn toggle_solved(&mut self, category_id: CategoryId, problem_id: ProblemId) -> Option<bool> {
        self.category_mut(category_id)?
            .problem_mut(problem_id)
            .map(Problem::toggle_solved)
    }

    /// Moves `dragged` into the slot currently held by `target`.
    pub fn reorder_categories(&mut self, dragged: CategoryId, target: CategoryId) -> bool {
        if dragged == target {
            return false;
        }
        match (self.index_of(dragged), self.index_of(target)) {
            (Some(from), Some(to)) => {
                array_move(&mut self.categories, from, to);
                true
            }
            _ => false,
        }
    }

    /// Moves problem `dragged` into the slot of `target` within one category.
    pub fn reorder_problems(
        &mut self,
        category_id: CategoryId,
        dragged: ProblemId,
        target: ProblemId,
    ) -> bool {
        if dragged == target {
            return false;
        }
        let Some(category) = self.category_mut(category_id) else {
            return false;
        };
        match (category.position_of(dragged), category.position_of(target)) {
            (Some(from), Some(to)) => {
                array_move(&mut category.problems, from, to);
                true
            }
            _ => false,
        }
    }

    /// Moves a problem to the end of another category.
    ///
    /// Fails with a duplicate error, changing nothing, if the target already
    /// holds a problem with the same title or number. When the problem's id is
    /// already taken in the target a fresh id is assigned. Returns the id the
    /// problem carries afterwards, or `None` if nothing moved.
    pub fn move_problem(
        &mut self,
        problem_id: ProblemId,
        from: CategoryId,
        to: CategoryId,
    ) -> Result<Option<ProblemId>> {
        if from == to {
            return Ok(None);
        }
        let (Some(from_idx), Some(to_idx)) = (self.index_of(from), self.index_of(to)) else {
            return Ok(None);
        };
        let Some(pos) = self.categories[from_idx].position_of(problem_id) else {
            return Ok(None);
        };

        {
            let problem = &self.categories[from_idx].problems[pos];
            self.categories[to_idx].check_unique(&problem.title, &problem.number, None)?;
        }

        let mut problem = self.categories[from_idx].problems.remove(pos);
        let target = &mut self.categories[to_idx];
        if target.problem(problem.id).is_some() {
            problem.id = target.next_problem_id(problem.id);
        }
        let id = problem.id;
        target.problems.push(problem);
        Ok(Some(id))
    }

    /// Picks a problem uniformly at random across all categories.
    pub fn random_problem<R>(&self, rng: &mut R, unsolved_only: bool) -> Option<(&Category, &Problem)>
    where
        R: Rng + ?Sized,
    {
        self.problems()
            .filter(|(_, p)| !unsolved_only || !p.solved)
            .choose(rng)
    }
}

/// Removes the element at `from` and reinserts it at `to`.
fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
