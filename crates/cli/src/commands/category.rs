// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;

use super::{category_name, open_tracker, resolve_category};
use crate::error::{Error, Result};
use crate::tracker::Tracker;

pub fn add(name: &str, description: &str) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    add_impl(&mut tracker, name, description)
}

pub(crate) fn add_impl(tracker: &mut Tracker, name: &str, description: &str) -> Result<()> {
    let id = tracker
        .mutate(|c| c.add_category(name, description, Utc::now()))?
        .ok_or(Error::FieldEmpty {
            field: "Category name",
        })?;
    println!("Created category {} (#{})", name.trim(), id);
    Ok(())
}

pub fn remove(category: &str) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    remove_impl(&mut tracker, category)
}

pub(crate) fn remove_impl(tracker: &mut Tracker, category: &str) -> Result<()> {
    let id = resolve_category(tracker.collection(), category)?;
    let (name, count) = tracker
        .collection()
        .category(id)
        .map(|c| (c.name.clone(), c.problems.len()))
        .unwrap_or_default();

    tracker.mutate(|c| Ok(c.delete_category(id)))?;
    println!("Deleted category {} and {} problem(s)", name, count);
    Ok(())
}

pub fn edit(category: &str, name: &str, description: &str) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    edit_impl(&mut tracker, category, name, description)
}

pub(crate) fn edit_impl(
    tracker: &mut Tracker,
    category: &str,
    name: &str,
    description: &str,
) -> Result<()> {
    let id = resolve_category(tracker.collection(), category)?;
    let old = category_name(tracker.collection(), id);

    if !tracker.mutate(|c| c.update_category(id, name, description))? {
        return Err(Error::FieldEmpty {
            field: "Category name",
        });
    }
    println!("Renamed category {} to {}", old, name.trim());
    Ok(())
}

pub fn collapse(category: &str) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    collapse_impl(&mut tracker, category)
}

pub(crate) fn collapse_impl(tracker: &mut Tracker, category: &str) -> Result<()> {
    let id = resolve_category(tracker.collection(), category)?;
    let collapsed = tracker.mutate(|c| Ok(c.toggle_category_collapsed(id)))?;

    let verb = if collapsed { "Collapsed" } else { "Expanded" };
    println!("{} {}", verb, category_name(tracker.collection(), id));
    Ok(())
}

pub fn reorder(dragged: &str, target: &str) -> Result<()> {
    let (mut tracker, _, _) = open_tracker()?;
    reorder_impl(&mut tracker, dragged, target)
}

pub(crate) fn reorder_impl(tracker: &mut Tracker, dragged: &str, target: &str) -> Result<()> {
    let dragged = resolve_category(tracker.collection(), dragged)?;
    let target = resolve_category(tracker.collection(), target)?;

    if !tracker.mutate(|c| Ok(c.reorder_categories(dragged, target)))? {
        println!("Nothing to reorder");
        return Ok(());
    }
    let position = tracker
        .collection()
        .categories()
        .iter()
        .position(|c| c.id == dragged)
        .map_or(0, |p| p + 1);
    println!(
        "Moved {} to position {}",
        category_name(tracker.collection(), dragged),
        position
    );
    Ok(())
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
