// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fuzzy search over problems.
//!
//! Each problem is scored against the query on five fields. A field scores
//! 1.0 when it contains the query as a case-insensitive substring; otherwise
//! it scores the fraction of query characters found in order, plus a small
//! bonus for adjacent query pairs that are also adjacent in the text. The
//! problem's overall score is the best weighted field score.

use std::ops::Range;

use regex::RegexBuilder;
use serde::Serialize;

use crate::problem::{Category, Problem};

/// Minimum overall score for a problem to be returned by default.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Bonus added per adjacent query character pair found adjacent in the text.
pub const CONSECUTIVE_BONUS: f64 = 0.1;

pub const TITLE_WEIGHT: f64 = 2.0;
pub const NUMBER_WEIGHT: f64 = 1.5;
pub const NOTES_WEIGHT: f64 = 1.0;
pub const DIFFICULTY_WEIGHT: f64 = 0.5;
pub const CATEGORY_WEIGHT: f64 = 0.8;

/// Scores `text` against `query` in the range `0.0..=1.0`.
///
/// Returns 0 when either side is empty.
pub fn calculate_fuzzy_score(query: &str, text: &str) -> f64 {
    if query.is_empty() || text.is_empty() {
        return 0.0;
    }

    let query = query.to_lowercase();
    let text = text.to_lowercase();
    if text.contains(&query) {
        return 1.0;
    }

    let query: Vec<char> = query.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let mut matched = 0usize;
    let mut qi = 0usize;
    for &c in &text {
        if qi == query.len() {
            break;
        }
        if query[qi] == c {
            matched += 1;
            qi += 1;
        }
    }
    let ratio = matched as f64 / query.len() as f64;

    // Only the first occurrence of each leading character is considered.
    let mut bonus = 0.0;
    for pair in query.windows(2) {
        let Some(first) = text.iter().position(|&c| c == pair[0]) else {
            continue;
        };
        let second = text[first + 1..].iter().position(|&c| c == pair[1]);
        if second == Some(0) {
            bonus += CONSECUTIVE_BONUS;
        }
    }

    (ratio + bonus).min(1.0)
}

/// Unweighted per-field scores for one problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldScores {
    pub title: f64,
    pub number: f64,
    pub notes: f64,
    pub difficulty: f64,
    pub category_name: f64,
}

impl FieldScores {
    pub fn compute(query: &str, category: &Category, problem: &Problem) -> Self {
        FieldScores {
            title: calculate_fuzzy_score(query, &problem.title),
            number: calculate_fuzzy_score(query, &problem.number),
            notes: calculate_fuzzy_score(query, &problem.notes),
            difficulty: calculate_fuzzy_score(query, problem.difficulty.as_str()),
            category_name: calculate_fuzzy_score(query, &category.name),
        }
    }

    /// The highest weighted field score.
    pub fn overall(&self) -> f64 {
        [
            self.title * TITLE_WEIGHT,
            self.number * NUMBER_WEIGHT,
            self.notes * NOTES_WEIGHT,
            self.difficulty * DIFFICULTY_WEIGHT,
            self.category_name * CATEGORY_WEIGHT,
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }
}

/// A problem that matched a search.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub category: &'a Category,
    pub problem: &'a Problem,
    pub score: f64,
    pub fields: FieldScores,
}

/// Returns every problem whose overall score reaches `threshold`, best first.
///
/// Ties are broken by title. A blank query matches nothing.
pub fn search_problems<'a>(
    categories: &'a [Category],
    query: &str,
    threshold: f64,
) -> Vec<SearchHit<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit<'a>> = categories
        .iter()
        .flat_map(|category| category.problems.iter().map(move |problem| (category, problem)))
        .filter_map(|(category, problem)| {
            let fields = FieldScores::compute(query, category, problem);
            let score = fields.overall();
            (score >= threshold).then_some(SearchHit {
                category,
                problem,
                score,
                fields,
            })
        })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.problem.title.cmp(&b.problem.title))
    });
    hits
}

/// Byte ranges of `text` that contain `query` literally, ignoring case.
pub fn highlight_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let query = query.trim();
    if query.is_empty() || text.is_empty() {
        return Vec::new();
    }
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(text).map(|m| m.range()).collect(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
#[path = "fuzzy_tests.rs"]
mod tests;
