// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of the collection.

use lt_core::fuzzy::highlight_ranges;
use lt_core::{Category, Collection, Problem, SearchHit};
use serde_json::{json, Value};

use crate::colors;

/// Header line for a category, e.g. `▾ Arrays (1/3 solved)  #17`.
pub fn category_header(category: &Category, collapsed: bool, color: bool) -> String {
    let marker = if collapsed { "▸" } else { "▾" };
    let counts = format!(
        "({}/{} solved)",
        category.solved_count(),
        category.problems.len()
    );
    format!(
        "{} {} {}  {}",
        marker,
        category.name,
        counts,
        colors::dim(&format!("#{}", category.id), color)
    )
}

/// Title prefixed with the problem number when there is one.
fn numbered_title(problem: &Problem, title: &str) -> String {
    if problem.number.is_empty() {
        title.to_string()
    } else {
        format!("{}. {}", problem.number, title)
    }
}

/// A problem row inside a category listing.
pub fn problem_line(problem: &Problem, color: bool) -> String {
    let check = if problem.solved { "[x]" } else { "[ ]" };
    let mut line = format!(
        "  {} {}  {}  {}",
        check,
        numbered_title(problem, &problem.title),
        colors::difficulty(problem.difficulty, color),
        colors::dim(&format!("#{}", problem.id), color)
    );
    if !problem.notes.is_empty() {
        line.push_str(&format!("\n      {}", colors::dim(&problem.notes, color)));
    }
    line
}

/// Full listing. Problems of collapsed categories are left out unless `all`.
pub fn collection_text(collection: &Collection, all: bool, color: bool) -> String {
    let mut lines = Vec::new();
    for category in collection.categories() {
        let collapsed = collection.is_collapsed(category.id);
        lines.push(category_header(category, collapsed, color));
        if collapsed && !all {
            continue;
        }
        if category.problems.is_empty() {
            lines.push(format!("  {}", colors::dim("(no problems)", color)));
        }
        lines.extend(category.problems.iter().map(|p| problem_line(p, color)));
    }
    lines.join("\n")
}

pub fn collection_json(collection: &Collection, all: bool) -> Value {
    let categories: Vec<Value> = collection
        .categories()
        .iter()
        .map(|category| {
            let collapsed = collection.is_collapsed(category.id);
            let mut value = json!({
                "id": category.id,
                "name": category.name,
                "description": category.description,
                "collapsed": collapsed,
                "solved": category.solved_count(),
                "total": category.problems.len(),
            });
            if all || !collapsed {
                value["problems"] = json!(category.problems);
            }
            value
        })
        .collect();
    json!({ "categories": categories })
}

/// A search result row with the matching part of the title highlighted.
pub fn search_line(hit: &SearchHit<'_>, query: &str, color: bool) -> String {
    let title = colors::highlight(
        &hit.problem.title,
        &highlight_ranges(&hit.problem.title, query),
        color,
    );
    format!(
        "{}  {}  {}  {}",
        numbered_title(hit.problem, &title),
        colors::difficulty(hit.problem.difficulty, color),
        colors::dim(&format!("in {}", hit.category.name), color),
        colors::dim(&format!("{:.2}", hit.score), color)
    )
}

pub fn search_json(hits: &[SearchHit<'_>]) -> Value {
    let hits: Vec<Value> = hits
        .iter()
        .map(|hit| {
            json!({
                "categoryId": hit.category.id,
                "category": hit.category.name,
                "problem": hit.problem,
                "score": hit.score,
                "fields": hit.fields,
                "url": hit.problem.leetcode_url(),
            })
        })
        .collect();
    Value::Array(hits)
}

/// Multi-line description of one problem.
pub fn problem_detail(category: &Category, problem: &Problem, color: bool) -> String {
    let status = if problem.solved {
        format!("solved ({}x)", problem.solved_times)
    } else {
        "unsolved".to_string()
    };
    let mut lines = vec![
        numbered_title(problem, &problem.title),
        format!("  Category:   {}", category.name),
        format!(
            "  Difficulty: {}",
            colors::difficulty(problem.difficulty, color)
        ),
        format!("  Status:     {}", status),
    ];
    if !problem.notes.is_empty() {
        lines.push(format!("  Notes:      {}", problem.notes));
    }
    lines.push(format!("  Link:       {}", problem.leetcode_url()));
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
