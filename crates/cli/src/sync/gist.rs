// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub gist wire format.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

/// Description that marks a gist as belonging to the tracker.
pub const GIST_DESCRIPTION: &str = "LeetCode Tracker Data";

/// Name of the single file holding the snapshot.
pub const GIST_FILENAME: &str = "leetcode-tracker.json";

/// Prefix of fine-grained personal access tokens.
const FINE_GRAINED_PREFIX: &str = "github_pat_";

/// A gist as returned by the list and get endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Gist {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub files: HashMap<String, Option<GistFile>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GistFile {
    /// Absent in list responses.
    #[serde(default)]
    pub content: Option<String>,
}

impl Gist {
    /// True for gists created by the tracker.
    pub fn is_tracker_gist(&self) -> bool {
        self.description.as_deref() == Some(GIST_DESCRIPTION)
            && matches!(self.files.get(GIST_FILENAME), Some(Some(_)))
    }

    /// Content of the snapshot file, if present and non-empty.
    pub fn snapshot_content(&self) -> Option<&str> {
        self.files
            .get(GIST_FILENAME)?
            .as_ref()?
            .content
            .as_deref()
            .filter(|c| !c.is_empty())
    }
}

/// `Authorization` header value for a token.
///
/// Fine-grained tokens use the `Bearer` scheme, classic tokens the `token`
/// scheme.
pub fn auth_header(token: &str) -> String {
    if token.starts_with(FINE_GRAINED_PREFIX) {
        format!("Bearer {}", token)
    } else {
        format!("token {}", token)
    }
}

/// Body for creating the private tracker gist.
pub(crate) fn create_body(content: &str) -> Value {
    json!({
        "description": GIST_DESCRIPTION,
        "public": false,
        "files": { GIST_FILENAME: { "content": content } },
    })
}

/// Body for replacing the snapshot file of an existing gist.
pub(crate) fn update_body(content: &str) -> Value {
    json!({
        "files": { GIST_FILENAME: { "content": content } },
    })
}

/// Best-effort error message from a failed response.
///
/// Prefers the `message` field of a JSON body, then the raw body, then the
/// status reason phrase.
pub(crate) fn error_message(body: &str, reason: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = map.get("message") {
            if !message.is_empty() {
                return message.clone();
            }
        }
    }
    if body.is_empty() {
        reason.to_string()
    } else {
        body.to_string()
    }
}
