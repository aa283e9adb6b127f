// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use crate::config::init_work_dir;
use crate::error::Result;

pub fn run(path: Option<String>) -> Result<()> {
    let target = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    run_impl(&target)?;
    Ok(())
}

/// Internal implementation returning the created work directory.
pub(crate) fn run_impl(target: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(target)?;
    let work_dir = init_work_dir(target)?;
    println!("Initialized leettrack in {}", work_dir.display());
    println!("Next: lt category add <name>");
    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
