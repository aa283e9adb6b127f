// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ltrack - A local LeetCode practice tracker with GitHub Gist sync.
//!
//! This crate provides the side-effecting half of the `lt` CLI tool. The
//! collection itself and every mutation on it live in `lt_core`; this crate
//! adds durable storage, configuration, remote sync, and presentation.
//!
//! # Main Components
//!
//! - [`Tracker`] - The collection plus write-through local storage
//! - [`Config`] - Project configuration (remote API, search threshold)
//! - [`sync`] - The GitHub Gist client behind a mockable transport
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! ```rust,ignore
//! use ltrack::{init_work_dir, find_work_dir, LocalStore, Tracker};
//!
//! // Initialize a new project
//! let work_dir = init_work_dir(Path::new("."))?;
//!
//! // Later, find and open an existing project
//! let work_dir = find_work_dir()?;
//! let tracker = Tracker::open(LocalStore::new(&work_dir));
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;

pub mod config;
pub mod error;
pub mod storage;
pub mod sync;
pub mod tracker;

pub use cli::{CategoryCommand, Cli, Command, OutputArgs, OutputFormat, ProblemRef, RemoteCommand};
pub use config::{find_work_dir, init_work_dir, Config};
pub use error::{Error, Result};
pub use storage::LocalStore;
pub use tracker::Tracker;

use clap::CommandFactory;
use clap_complete::generate;
use commands::problem::ProblemFields;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Add {
            category,
            title,
            number,
            difficulty,
            notes,
        } => commands::problem::add(
            &category,
            &title,
            ProblemFields {
                number,
                difficulty,
                notes,
            },
        ),
        Command::Rm { target } => commands::problem::remove(&target.category, &target.problem),
        Command::Edit {
            target,
            attr,
            value,
        } => commands::problem::edit(&target.category, &target.problem, &attr, &value),
        Command::Solve { target } => commands::problem::solve(&target.category, &target.problem),
        Command::Reorder {
            category,
            dragged,
            target,
        } => commands::problem::reorder(&category, &dragged, &target),
        Command::Move { problem, from, to } => commands::problem::move_to(&problem, &from, &to),
        Command::Drag { active, over } => commands::drag::run(&active, over.as_deref()),
        Command::List { all, output } => commands::list::run(all, output.output),
        Command::Search {
            query,
            threshold,
            output,
        } => commands::search::run(&query, threshold, output.output),
        Command::Random { unsolved } => commands::random::run(unsolved),
        Command::Category(cmd) => match cmd {
            CategoryCommand::Add { name, description } => {
                commands::category::add(&name, &description)
            }
            CategoryCommand::Rm { category } => commands::category::remove(&category),
            CategoryCommand::Edit {
                category,
                name,
                description,
            } => commands::category::edit(&category, &name, &description),
            CategoryCommand::Collapse { category } => commands::category::collapse(&category),
            CategoryCommand::Reorder { dragged, target } => {
                commands::category::reorder(&dragged, &target)
            }
        },
        Command::Init { path } => commands::init::run(path),
        Command::Export { path } => commands::export::run(path.as_deref()),
        Command::Import { path } => commands::import::run(&path),
        Command::Remote(cmd) => match cmd {
            RemoteCommand::Auth { token } => commands::remote::auth(&token),
            RemoteCommand::Link { gist_id } => commands::remote::link(&gist_id),
            RemoteCommand::List => commands::remote::list(),
            RemoteCommand::Save => commands::remote::save(),
            RemoteCommand::Load => commands::remote::load(),
            RemoteCommand::Status => commands::remote::status(),
            RemoteCommand::Disconnect => commands::remote::disconnect(),
        },
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "lt", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
