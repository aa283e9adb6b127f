// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local durable storage.
//!
//! State lives in four named slots, one file each, inside `.leettrack/`.
//! Reads never fail: a missing or unreadable slot yields the empty default.
//! Writes replace the slot atomically; a failed write is logged and the
//! in-memory state stays authoritative.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use lt_core::{Category, CategoryId, Collection};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Ordered categories with their problems.
pub const CATEGORIES_SLOT: &str = "leetcode-tracker.json";
/// Ids of collapsed categories.
pub const COLLAPSED_SLOT: &str = "leetcode-tracker-collapsed.json";
/// GitHub personal access token.
pub const TOKEN_SLOT: &str = "github-token";
/// Id of the linked gist.
pub const GIST_ID_SLOT: &str = "gist-id";

#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        LocalStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, slot: &str) -> PathBuf {
        self.dir.join(slot)
    }

    /// Raw slot contents, or `None` when the slot is empty or unreadable.
    pub fn read(&self, slot: &str) -> Option<String> {
        match fs::read_to_string(self.path(slot)) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(slot, error = %e, "failed to read local storage");
                None
            }
        }
    }

    /// Replaces a slot's contents. Returns false if the write failed.
    pub fn write(&self, slot: &str, content: &str) -> bool {
        match self.write_atomic(slot, content) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(slot, error = %e, "failed to write local storage");
                false
            }
        }
    }

    fn write_atomic(&self, slot: &str, content: &str) -> std::io::Result<()> {
        let target = self.path(slot);
        let tmp = self.path(&format!(".{}.tmp", slot));
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &target)
    }

    /// Empties a slot. Already-empty slots are fine.
    pub fn remove(&self, slot: &str) {
        if let Err(e) = fs::remove_file(self.path(slot)) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!(slot, error = %e, "failed to clear local storage");
            }
        }
    }

    fn read_json<T: DeserializeOwned + Default>(&self, slot: &str) -> T {
        let Some(content) = self.read(slot) else {
            return T::default();
        };
        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(slot, error = %e, "ignoring corrupt local storage");
                T::default()
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, slot: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(json) => self.write(slot, &json),
            Err(e) => {
                tracing::warn!(slot, error = %e, "failed to serialize local storage");
                false
            }
        }
    }

    /// Loads the collection from its two slots.
    pub fn load_collection(&self) -> Collection {
        let categories: Vec<Category> = self.read_json(CATEGORIES_SLOT);
        let collapsed: Vec<CategoryId> = self.read_json(COLLAPSED_SLOT);
        Collection::from_parts(categories, collapsed)
    }

    /// Writes both collection slots. Returns false if either write failed.
    pub fn save_collection(&self, collection: &Collection) -> bool {
        let categories = self.write_json(CATEGORIES_SLOT, collection.categories());
        let collapsed = self.write_json(COLLAPSED_SLOT, collection.collapsed());
        categories && collapsed
    }

    fn read_trimmed(&self, slot: &str) -> Option<String> {
        self.read(slot)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn credential(&self) -> Option<String> {
        self.read_trimmed(TOKEN_SLOT)
    }

    pub fn remote_id(&self) -> Option<String> {
        self.read_trimmed(GIST_ID_SLOT)
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
