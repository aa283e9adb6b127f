// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

fn seeded() -> TempDir {
    let temp = init_temp();
    add_category(&temp, "Arrays");
    add_category(&temp, "Graphs");
    add_problem(&temp, "Arrays", "Two Sum", &["-n", "1", "-D", "easy"]);
    add_problem(&temp, "Arrays", "Container With Most Water", &["-n", "11"]);
    add_problem(&temp, "Graphs", "Number of Islands", &["-n", "200"]);
    temp
}

#[test]
fn search_finds_title() {
    let temp = seeded();

    lt().args(["search", "two sum", "-t", "1.5"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Two Sum"))
        .stdout(predicate::str::contains("in Arrays"))
        .stdout(predicate::str::contains("Number of Islands").not());
}

#[test]
fn search_json_reports_hits() {
    let temp = seeded();

    let out = run_ok(&temp, &["search", "islands", "-o", "json"]);
    let hits: serde_json::Value = serde_json::from_str(&out).unwrap();
    let hits = hits.as_array().unwrap();

    assert_eq!(hits[0]["problem"]["title"], "Number of Islands");
    assert_eq!(hits[0]["category"], "Graphs");
    assert!(hits[0]["score"].as_f64().unwrap() > 0.3);
    assert!(hits[0]["url"]
        .as_str()
        .unwrap()
        .starts_with("https://leetcode.com/problems/"));
}

#[test]
fn search_without_match() {
    let temp = seeded();

    lt().args(["search", "zzzzqqq"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems match 'zzzzqqq'"));
}

#[test]
fn search_rejects_negative_threshold() {
    let temp = seeded();

    lt().args(["search", "sum", "-t", "-1"])
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn list_json_counts() {
    let temp = seeded();
    run_ok(&temp, &["solve", "Arrays", "Two Sum"]);

    let listed = list_json(&temp);
    let arrays = &listed["categories"][0];
    assert_eq!(arrays["name"], "Arrays");
    assert_eq!(arrays["solved"], 1);
    assert_eq!(arrays["total"], 2);
    assert_eq!(arrays["collapsed"], false);
}

#[test]
fn random_picks_unsolved() {
    let temp = init_temp();
    add_category(&temp, "Arrays");
    add_problem(&temp, "Arrays", "Two Sum", &[]);
    add_problem(&temp, "Arrays", "3Sum", &[]);
    run_ok(&temp, &["solve", "Arrays", "Two Sum"]);

    for _ in 0..5 {
        lt().args(["random", "--unsolved"])
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("3Sum"));
    }
}

#[test]
fn random_on_empty_collection() {
    let temp = init_temp();

    lt().arg("random")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems yet"));
}

#[test]
fn random_when_everything_solved() {
    let temp = init_temp();
    add_category(&temp, "Arrays");
    add_problem(&temp, "Arrays", "Two Sum", &[]);
    run_ok(&temp, &["solve", "Arrays", "Two Sum"]);

    lt().args(["random", "-u"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No unsolved problems left"));
}
