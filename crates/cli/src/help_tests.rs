// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for help text layout.

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn rows_align_descriptions() {
    std::env::set_var("NO_COLOR", "1");
    assert_eq!(row("add", "Add"), "  add         Add");
    assert_eq!(row("completion", "Gen"), "  completion  Gen");
}

#[test]
fn commands_groups_sections() {
    std::env::set_var("NO_COLOR", "1");
    let text = commands();

    let problems = text.find("Problems:").unwrap();
    let setup = text.find("Setup & Data:").unwrap();
    assert!(problems < setup);
    assert!(text.contains("  remote      Sync with a GitHub gist"));
}

#[test]
fn quickstart_mentions_init_first() {
    std::env::set_var("NO_COLOR", "1");
    let text = quickstart();
    assert!(text.starts_with("Get started:"));
    assert!(text.contains("lt init"));
}
