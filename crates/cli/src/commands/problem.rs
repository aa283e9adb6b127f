// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use lt_core::{CategoryId, Difficulty, NewProblem, ProblemId, ProblemPatch};

use super::{category_name, open_tracker, resolve_category, resolve_target};
use crate::error::{Error, Result};
use crate::tracker::Tracker;

/// Optional fields accepted by `lt add`.
#[derive(Debug, Clone, Default)]
pub struct ProblemFields {
    pub number: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub notes: Option<String>,
}

impl ProblemFields {
    fn apply(self, mut new: NewProblem) -> NewProblem {
        if let Some(number) = self.number {
            new = new.with_number(number);
        }
        if let Some(difficulty) = self.difficulty {
            new = new.with_difficulty(difficulty);
        }
        if let Some(notes) = self.notes {
            new = new.with_notes(notes);
        }
        new
    }
}

pub fn add(category: &str, title: &str, fields: ProblemFields) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    add_impl(&mut tracker, category, title, fields)
}

pub(crate) fn add_impl(
    tracker: &mut Tracker,
    category: &str,
    title: &str,
    fields: ProblemFields,
) -> Result<()> {
    let category_id = resolve_category(tracker.collection(), category)?;
    let new = fields.apply(NewProblem::titled(title));

    let id = tracker
        .mutate(|c| c.add_problem(category_id, new, Utc::now()))?
        .ok_or(Error::FieldEmpty { field: "Title" })?;
    println!(
        "Added {} to {} (#{})",
        title.trim(),
        category_name(tracker.collection(), category_id),
        id
    );
    Ok(())
}

pub fn remove(category: &str, problem: &str) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    remove_impl(&mut tracker, category, problem)
}

pub(crate) fn remove_impl(tracker: &mut Tracker, category: &str, problem: &str) -> Result<()> {
    let (category_id, problem_id) = resolve_target(tracker.collection(), category, problem)?;
    let title = problem_title(tracker, category_id, problem_id);

    tracker.mutate(|c| Ok(c.delete_problem(category_id, problem_id)))?;
    println!("Removed {}", title);
    Ok(())
}

pub fn edit(category: &str, problem: &str, attr: &str, value: &str) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    edit_impl(&mut tracker, category, problem, attr, value)
}

pub(crate) fn edit_impl(
    tracker: &mut Tracker,
    category: &str,
    problem: &str,
    attr: &str,
    value: &str,
) -> Result<()> {
    let (category_id, problem_id) = resolve_target(tracker.collection(), category, problem)?;
    let title = problem_title(tracker, category_id, problem_id);

    let attr = attr.to_lowercase();
    let patch = match attr.as_str() {
        "title" => {
            if value.trim().is_empty() {
                return Err(Error::FieldEmpty { field: "Title" });
            }
            ProblemPatch {
                title: Some(value.to_string()),
                ..ProblemPatch::default()
            }
        }
        "number" => ProblemPatch {
            number: Some(value.to_string()),
            ..ProblemPatch::default()
        },
        "difficulty" => ProblemPatch {
            difficulty: Some(value.parse()?),
            ..ProblemPatch::default()
        },
        "notes" => ProblemPatch {
            notes: Some(value.to_string()),
            ..ProblemPatch::default()
        },
        _ => return Err(Error::UnknownAttribute { attr }),
    };

    tracker.mutate(|c| c.update_problem(category_id, problem_id, patch))?;
    println!("Updated {} of {} to: {}", attr, title, value.trim());
    Ok(())
}

pub fn solve(category: &str, problem: &str) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    solve_impl(&mut tracker, category, problem)
}

pub(crate) fn solve_impl(tracker: &mut Tracker, category: &str, problem: &str) -> Result<()> {
    let (category_id, problem_id) = resolve_target(tracker.collection(), category, problem)?;
    let title = problem_title(tracker, category_id, problem_id);

    match tracker.mutate(|c| Ok(c.toggle_solved(category_id, problem_id)))? {
        Some(true) => println!("Solved {}", title),
        Some(false) => println!("Marked {} unsolved", title),
        None => {}
    }
    Ok(())
}

pub fn reorder(category: &str, dragged: &str, target: &str) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    reorder_impl(&mut tracker, category, dragged, target)
}

pub(crate) fn reorder_impl(
    tracker: &mut Tracker,
    category: &str,
    dragged: &str,
    target: &str,
) -> Result<()> {
    let (category_id, dragged_id) = resolve_target(tracker.collection(), category, dragged)?;
    let (_, target_id) = resolve_target(tracker.collection(), category, target)?;

    if tracker.mutate(|c| Ok(c.reorder_problems(category_id, dragged_id, target_id)))? {
        println!(
            "Moved {} to the position of {}",
            problem_title(tracker, category_id, dragged_id),
            problem_title(tracker, category_id, target_id)
        );
    } else {
        println!("Nothing to reorder");
    }
    Ok(())
}

pub fn move_to(problem: &str, from: &str, to: &str) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    move_impl(&mut tracker, problem, from, to)
}

pub(crate) fn move_impl(tracker: &mut Tracker, problem: &str, from: &str, to: &str) -> Result<()> {
    let (from_id, problem_id) = resolve_target(tracker.collection(), from, problem)?;
    let to_id = resolve_category(tracker.collection(), to)?;
    let title = problem_title(tracker, from_id, problem_id);

    match tracker.mutate(|c| c.move_problem(problem_id, from_id, to_id))? {
        Some(new_id) => println!(
            "Moved {} to {} (#{})",
            title,
            category_name(tracker.collection(), to_id),
            new_id
        ),
        None => println!(
            "{} is already in {}",
            title,
            category_name(tracker.collection(), to_id)
        ),
    }
    Ok(())
}

fn problem_title(tracker: &Tracker, category_id: CategoryId, problem_id: ProblemId) -> String {
    tracker
        .collection()
        .category(category_id)
        .and_then(|c| c.problem(problem_id))
        .map_or_else(|| problem_id.to_string(), |p| p.title.clone())
}

#[cfg(test)]
#[path = "problem_tests.rs"]
mod tests;
