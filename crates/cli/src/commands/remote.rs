// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::future::Future;

use super::open_tracker;
use crate::error::Result;
use crate::storage::LocalStore;
use crate::sync::{Gist, GistSync, SaveOutcome, Transport};
use crate::tracker::Tracker;

/// Open the tracker and a sync client backed by the same work directory.
fn open_remote() -> Result<(Tracker, GistSync)> {
    let (tracker, config, work_dir) = open_tracker()?;
    let sync = GistSync::new(&config.remote, LocalStore::new(&work_dir))?;
    Ok((tracker, sync))
}

/// Drive one remote operation to completion on a fresh runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Runtime::new()?;
    Ok(runtime.block_on(future))
}

pub fn auth(token: &str) -> Result<()> {
    let (_, mut sync) = open_remote()?;
    auth_impl(&mut sync, token);
    Ok(())
}

pub(crate) fn auth_impl<T: Transport>(sync: &mut GistSync<T>, token: &str) {
    sync.set_credential(token);
    println!("GitHub token saved");
}

pub fn link(gist_id: &str) -> Result<()> {
    let (mut tracker, mut sync) = open_remote()?;
    block_on(link_impl(&mut sync, &mut tracker, gist_id))?
}

/// Link a gist and immediately load it if it holds tracker data.
pub(crate) async fn link_impl<T: Transport>(
    sync: &mut GistSync<T>,
    tracker: &mut Tracker,
    gist_id: &str,
) -> Result<()> {
    sync.set_remote_resource_id(gist_id);
    println!("Linked gist {}", gist_id.trim());
    load_impl(sync, tracker).await?;
    Ok(())
}

pub fn list() -> Result<()> {
    let (_, sync) = open_remote()?;
    block_on(list_impl(&sync))??;
    Ok(())
}

pub(crate) async fn list_impl<T: Transport>(sync: &GistSync<T>) -> Result<Vec<Gist>> {
    let mut gists = sync.list_candidate_resources().await?;
    gists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    if gists.is_empty() {
        println!("No tracker gists found");
    }
    for gist in &gists {
        let linked = if sync.remote_id() == Some(gist.id.as_str()) {
            "  (linked)"
        } else {
            ""
        };
        let updated = gist
            .updated_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("{}  {}{}", gist.id, updated, linked);
    }
    Ok(gists)
}

pub fn save() -> Result<()> {
    let (tracker, mut sync) = open_remote()?;
    block_on(save_impl(&mut sync, &tracker))??;
    Ok(())
}

pub(crate) async fn save_impl<T: Transport>(
    sync: &mut GistSync<T>,
    tracker: &Tracker,
) -> Result<SaveOutcome> {
    let outcome = sync.save(&tracker.collection().to_snapshot()).await?;
    match &outcome {
        SaveOutcome::Updated { id, adopted: true } => {
            println!("Linked existing gist {} and saved", id)
        }
        SaveOutcome::Updated { id, .. } => println!("Saved to gist {}", id),
        SaveOutcome::Created {
            id,
            replaced: Some(old),
        } => println!("Gist {} no longer exists; saved to new gist {}", old, id),
        SaveOutcome::Created { id, .. } => println!("Created gist {}", id),
    }
    Ok(outcome)
}

pub fn load() -> Result<()> {
    let (mut tracker, sync) = open_remote()?;
    block_on(load_impl(&sync, &mut tracker))??;
    Ok(())
}

/// Install the linked gist's snapshot. Returns false when it has none.
pub(crate) async fn load_impl<T: Transport>(sync: &GistSync<T>, tracker: &mut Tracker) -> Result<bool> {
    match sync.load().await? {
        Some(snapshot) => {
            tracker.install(snapshot);
            let collection = tracker.collection();
            println!(
                "Loaded {} categories ({} problems)",
                collection.categories().len(),
                collection.problem_count()
            );
            Ok(true)
        }
        None => {
            println!("No tracker data in gist yet");
            Ok(false)
        }
    }
}

pub fn status() -> Result<()> {
    let (_, sync) = open_remote()?;
    println!("{}", status_impl(&sync));
    Ok(())
}

pub(crate) fn status_impl<T: Transport>(sync: &GistSync<T>) -> String {
    let token = if sync.is_connected() {
        "configured"
    } else {
        "not configured"
    };
    format!(
        "GitHub token: {}\nGist: {}",
        token,
        sync.remote_id().unwrap_or("not linked")
    )
}

pub fn disconnect() -> Result<()> {
    let (_, mut sync) = open_remote()?;
    disconnect_impl(&mut sync);
    Ok(())
}

pub(crate) fn disconnect_impl<T: Transport>(sync: &mut GistSync<T>) {
    sync.disconnect();
    println!("Disconnected from GitHub");
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
