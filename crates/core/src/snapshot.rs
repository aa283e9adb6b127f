// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serialized forms of the collection.
//!
//! A [`Snapshot`] is what gets pushed to and pulled from the remote gist. An
//! [`ExportDocument`] wraps the same data with export metadata. Imports accept
//! either shape, or a bare array of categories written by older versions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::problem::{Category, CategoryId};

/// Version tag written into exports.
pub const EXPORT_VERSION: &str = "1.1";

/// Full collection state at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub collapsed_categories: Vec<CategoryId>,
}

impl Snapshot {
    /// Interprets an already-parsed JSON value.
    ///
    /// Objects supply `categories` and `collapsedCategories`, each defaulting
    /// to empty. An array is taken as the legacy list of categories.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(_) => {
                let categories: Vec<Category> = serde_json::from_value(value)
                    .map_err(|e| Error::InvalidImport(e.to_string()))?;
                Ok(Snapshot {
                    categories,
                    collapsed_categories: Vec::new(),
                })
            }
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| Error::InvalidImport(e.to_string()))
            }
            other => Err(Error::InvalidImport(format!(
                "expected an object or an array of categories, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parses import file contents in any supported shape.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| Error::InvalidImport(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Snapshot plus export metadata, as written by `export`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub categories: Vec<Category>,
    pub collapsed_categories: Vec<CategoryId>,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

impl ExportDocument {
    pub fn new(snapshot: Snapshot, export_date: DateTime<Utc>) -> Self {
        ExportDocument {
            categories: snapshot.categories,
            collapsed_categories: snapshot.collapsed_categories,
            export_date,
            version: EXPORT_VERSION.to_string(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Default export file name for the given day, e.g. `leetcode-tracker-2024-06-01.json`.
pub fn export_filename(date: DateTime<Utc>) -> String {
    format!("leetcode-tracker-{}.json", date.format("%Y-%m-%d"))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
