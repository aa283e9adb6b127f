// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Write-through wrapper tying the collection to local storage.

use lt_core::{Collection, Snapshot};

use crate::error::Result;
use crate::storage::LocalStore;

/// The in-memory collection plus the store it is mirrored to.
///
/// Every successful mutation is written to the store before returning.
#[derive(Debug)]
pub struct Tracker {
    collection: Collection,
    store: LocalStore,
}

impl Tracker {
    /// Loads the collection from `store`.
    pub fn open(store: LocalStore) -> Self {
        let collection = store.load_collection();
        tracing::debug!(
            categories = collection.categories().len(),
            problems = collection.problem_count(),
            "loaded collection"
        );
        Tracker { collection, store }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Applies `f` and persists the result. Failed operations persist nothing.
    pub fn mutate<R>(&mut self, f: impl FnOnce(&mut Collection) -> lt_core::Result<R>) -> Result<R> {
        let out = f(&mut self.collection)?;
        self.persist();
        Ok(out)
    }

    /// Replaces the whole collection, as after a remote load or import.
    pub fn install(&mut self, snapshot: Snapshot) {
        self.collection.replace(snapshot);
        self.persist();
    }

    fn persist(&self) {
        if !self.store.save_collection(&self.collection) {
            tracing::warn!("changes kept in memory only for this command");
        }
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
