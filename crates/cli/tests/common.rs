// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `lt` binary with colors and logging pinned for stable output.
pub fn lt() -> Command {
    let mut cmd = cargo_bin_cmd!("lt");
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("LT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    lt().arg("init").current_dir(temp.path()).assert().success();
    temp
}

/// Run `lt` in `temp`, require success, and return stdout.
pub fn run_ok(temp: &TempDir, args: &[&str]) -> String {
    let assert = lt().args(args).current_dir(temp.path()).assert().success();
    String::from_utf8_lossy(&assert.get_output().stdout).to_string()
}

pub fn add_category(temp: &TempDir, name: &str) {
    run_ok(temp, &["category", "add", name]);
}

pub fn add_problem(temp: &TempDir, category: &str, title: &str, extra: &[&str]) {
    let mut args = vec!["add", category, title];
    args.extend_from_slice(extra);
    run_ok(temp, &args);
}

/// The collection as reported by `lt list --all -o json`.
pub fn list_json(temp: &TempDir) -> serde_json::Value {
    let out = run_ok(temp, &["list", "--all", "-o", "json"]);
    serde_json::from_str(&out).unwrap()
}

pub fn category_names(temp: &TempDir) -> Vec<String> {
    list_json(temp)["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

pub fn category_id(temp: &TempDir, name: &str) -> i64 {
    list_json(temp)["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
        .and_then(|c| c["id"].as_i64())
        .unwrap()
}

/// Titles of one category's problems in display order.
pub fn titles(temp: &TempDir, category: &str) -> Vec<String> {
    list_json(temp)["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == category)
        .and_then(|c| c["problems"].as_array().cloned())
        .unwrap_or_default()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}
