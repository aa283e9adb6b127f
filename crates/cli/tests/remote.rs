// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

/// Point the sync client at a closed local port so nothing leaves the machine.
fn offline(temp: &TempDir) {
    let config = "[remote]\napi_url = \"http://127.0.0.1:9\"\ntimeout_secs = 5\n";
    std::fs::write(temp.path().join(".leettrack/config.toml"), config).unwrap();
}

#[test]
fn status_when_not_configured() {
    let temp = init_temp();

    lt().args(["remote", "status"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub token: not configured"))
        .stdout(predicate::str::contains("Gist: not linked"));
}

#[test]
fn auth_stores_token_and_disconnect_clears_it() {
    let temp = init_temp();

    lt().args(["remote", "auth", "ghp_secret"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub token saved"));

    lt().args(["remote", "status"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub token: configured"))
        .stdout(predicate::str::contains("ghp_secret").not());

    lt().args(["remote", "disconnect"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Disconnected from GitHub"));

    lt().args(["remote", "status"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub token: not configured"));
}

#[test]
fn save_requires_token() {
    let temp = init_temp();
    offline(&temp);

    lt().args(["remote", "save"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("GitHub token required"));
}

#[test]
fn list_requires_token() {
    let temp = init_temp();
    offline(&temp);

    lt().args(["remote", "list"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("GitHub token required"));
}

#[test]
fn unreachable_server_is_reported() {
    let temp = init_temp();
    offline(&temp);
    run_ok(&temp, &["remote", "auth", "ghp_secret"]);

    lt().args(["remote", "list"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}
