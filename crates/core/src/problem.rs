// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Category identifier. Creation-time milliseconds, bumped on collision.
pub type CategoryId = i64;

/// Problem identifier, unique only within its owning category.
pub type ProblemId = i64;

/// How hard a problem is rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Fully qualified address of a problem: owning category plus problem id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProblemKey {
    pub category_id: CategoryId,
    pub problem_id: ProblemId,
}

impl ProblemKey {
    pub fn new(category_id: CategoryId, problem_id: ProblemId) -> Self {
        ProblemKey {
            category_id,
            problem_id,
        }
    }
}

impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category_id, self.problem_id)
    }
}

/// A single tracked problem.
///
/// Field names follow the camelCase JSON layout used by exports and the
/// remote gist so that documents move between devices unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: ProblemId,
    pub title: String,
    /// Problem number; empty when unknown.
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(default)]
    pub solved: bool,
    /// Number of false -> true transitions of `solved`.
    #[serde(default)]
    pub solved_times: u32,
    /// Creation time. Never touched by solve toggling despite the name.
    #[serde(default)]
    pub solved_at: DateTime<Utc>,
}

impl Problem {
    /// Flips the solved flag and returns the new value.
    ///
    /// Only the unsolved -> solved transition bumps `solved_times`.
    pub fn toggle_solved(&mut self) -> bool {
        if !self.solved {
            self.solved_times = self.solved_times.saturating_add(1);
        }
        self.solved = !self.solved;
        self.solved
    }

    /// Case-insensitive title comparison.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// True when this problem carries the given non-empty number.
    pub fn has_number(&self, number: &str) -> bool {
        let number = number.trim();
        !number.is_empty() && self.number.trim() == number
    }

    /// Link to the problem on leetcode.com.
    ///
    /// Numbered problems link to their slug page; others fall back to a
    /// problemset search for the title.
    pub fn leetcode_url(&self) -> String {
        if self.number.trim().is_empty() {
            return format!(
                "https://leetcode.com/problemset/all/?search={}",
                urlencoding::encode(&self.title)
            );
        }

        let mut slug = String::with_capacity(self.title.len());
        let mut in_whitespace = false;
        for ch in self.title.to_lowercase().chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    slug.push('-');
                }
                in_whitespace = true;
            } else {
                slug.push(ch);
                in_whitespace = false;
            }
        }
        format!("https://leetcode.com/problems/{}/", slug)
    }
}

/// Partial update for a problem. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemPatch {
    pub title: Option<String>,
    pub number: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub notes: Option<String>,
}

impl ProblemPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.number.is_none()
            && self.difficulty.is_none()
            && self.notes.is_none()
    }
}

/// A named, ordered group of problems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default)]
    pub problems: Vec<Problem>,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Category {
            id,
            name: name.into(),
            description: description.into(),
            problems: Vec::new(),
        }
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn problem(&self, id: ProblemId) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    pub fn problem_mut(&mut self, id: ProblemId) -> Option<&mut Problem> {
        self.problems.iter_mut().find(|p| p.id == id)
    }

    pub fn position_of(&self, id: ProblemId) -> Option<usize> {
        self.problems.iter().position(|p| p.id == id)
    }

    /// Number of problems currently marked solved.
    pub fn solved_count(&self) -> usize {
        self.problems.iter().filter(|p| p.solved).count()
    }

    /// Rejects `title` or `number` when a sibling other than `except` already uses it.
    pub(crate) fn check_unique(
        &self,
        title: &str,
        number: &str,
        except: Option<ProblemId>,
    ) -> Result<()> {
        let siblings = || self.problems.iter().filter(|p| Some(p.id) != except);

        if siblings().any(|p| p.has_title(title)) {
            return Err(Error::DuplicateTitle {
                title: title.to_string(),
                category: self.name.clone(),
            });
        }
        if siblings().any(|p| p.has_number(number)) {
            return Err(Error::DuplicateNumber {
                number: number.trim().to_string(),
                category: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Smallest id that is at least `now_ms` and above every id in this category.
    pub(crate) fn next_problem_id(&self, now_ms: i64) -> ProblemId {
        let ids: Vec<ProblemId> = self.problems.iter().map(|p| p.id).collect();
        next_id(&ids, now_ms)
    }
}

/// Smallest id that is at least `now_ms` and above every id in `ids`.
///
/// Once the maximum is `i64::MAX` the smallest unused non-negative id is
/// taken instead.
pub(crate) fn next_id(ids: &[i64], now_ms: i64) -> i64 {
    match ids.iter().copied().max() {
        Some(max) if max >= now_ms => max
            .checked_add(1)
            .or_else(|| (0..i64::MAX).find(|id| !ids.contains(id)))
            .unwrap_or(now_ms),
        _ => now_ms,
    }
}

/// Accepts a string, a number, or null for free-text fields.
///
/// Older exports stored problem numbers as JSON numbers.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}

#[cfg(test)]
#[path = "problem_tests.rs"]
mod tests;
