// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use chrono::{TimeZone, Utc};
use lt_core::{search_problems, Difficulty, NewProblem};

fn sample() -> Collection {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut c = Collection::new();
    let arrays = c.add_category("Arrays", "", now).unwrap().unwrap();
    let graphs = c.add_category("Graphs", "", now).unwrap().unwrap();
    let two_sum = c
        .add_problem(
            arrays,
            NewProblem::titled("Two Sum")
                .with_number("1")
                .with_difficulty(Difficulty::Easy)
                .with_notes("hash map"),
            now,
        )
        .unwrap()
        .unwrap();
    c.add_problem(arrays, NewProblem::titled("Rotate Array"), now)
        .unwrap();
    c.add_problem(graphs, NewProblem::titled("Course Schedule"), now)
        .unwrap();
    c.toggle_solved(arrays, two_sum);
    c.toggle_category_collapsed(graphs);
    c
}

#[test]
fn test_category_header_counts() {
    let c = sample();
    let arrays = &c.categories()[0];

    let line = category_header(arrays, false, false);
    assert_eq!(line, format!("▾ Arrays (1/2 solved)  #{}", arrays.id));
    assert!(category_header(arrays, true, false).starts_with("▸ "));
}

#[test]
fn test_problem_line_with_number_and_notes() {
    let c = sample();
    let problem = &c.categories()[0].problems[0];

    let line = problem_line(problem, false);
    assert_eq!(
        line,
        format!("  [x] 1. Two Sum  Easy  #{}\n      hash map", problem.id)
    );
}

#[test]
fn test_problem_line_without_number() {
    let c = sample();
    let problem = &c.categories()[0].problems[1];

    assert_eq!(
        problem_line(problem, false),
        format!("  [ ] Rotate Array  Medium  #{}", problem.id)
    );
}

#[test]
fn test_collection_text_hides_collapsed_problems() {
    let c = sample();

    let text = collection_text(&c, false, false);
    assert!(text.contains("Two Sum"));
    assert!(text.contains("▸ Graphs (0/1 solved)"));
    assert!(!text.contains("Course Schedule"));

    let all = collection_text(&c, true, false);
    assert!(all.contains("Course Schedule"));
}

#[test]
fn test_collection_json_shape() {
    let c = sample();

    let value = collection_json(&c, false);
    let categories = value["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["solved"], 1);
    assert_eq!(categories[0]["total"], 2);
    assert_eq!(categories[0]["problems"][0]["title"], "Two Sum");
    assert_eq!(categories[0]["problems"][0]["solvedTimes"], 1);
    assert_eq!(categories[1]["collapsed"], true);
    assert!(categories[1].get("problems").is_none());

    let all = collection_json(&c, true);
    assert!(all["categories"][1]["problems"].is_array());
}

#[test]
fn test_search_line_and_json() {
    let c = sample();
    let hits = search_problems(c.categories(), "two", 0.3);
    assert_eq!(hits[0].problem.title, "Two Sum");

    let line = search_line(&hits[0], "two", false);
    assert!(line.starts_with("1. Two Sum  Easy  in Arrays  "));

    let value = search_json(&hits);
    assert_eq!(value[0]["category"], "Arrays");
    assert_eq!(value[0]["fields"]["title"], hits[0].fields.title);
    assert_eq!(value[0]["url"], "https://leetcode.com/problems/two-sum/");
}

#[test]
fn test_search_line_highlights_when_colored() {
    let c = sample();
    let hits = search_problems(c.categories(), "sum", 0.3);

    let line = search_line(&hits[0], "sum", true);
    assert!(line.contains("\x1b[38;5;229mSum\x1b[0m"));
}

#[test]
fn test_problem_detail() {
    let c = sample();
    let category = &c.categories()[0];

    let detail = problem_detail(category, &category.problems[0], false);
    assert_eq!(
        detail,
        "1. Two Sum\n  Category:   Arrays\n  Difficulty: Easy\n  Status:     solved (1x)\n  Notes:      hash map\n  Link:       https://leetcode.com/problems/two-sum/"
    );

    let unsolved = problem_detail(category, &category.problems[1], false);
    assert!(unsolved.contains("Status:     unsolved"));
    assert!(unsolved.contains("problemset/all/?search=Rotate%20Array"));
}
