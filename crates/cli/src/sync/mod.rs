// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote sync with a single GitHub gist.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Client    │────►│  Transport  │────►│  GitHub     │
//! │ (GistSync)  │◄────│   (trait)   │◄────│  Gist API   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ LocalStore  │  (credential + gist id slots)
//! └─────────────┘
//! ```
//!
//! The whole collection snapshot is stored as the content of one file in
//! one private gist. Saving reuses the linked gist, adopts the most recently
//! updated tracker gist when none is linked, and recreates the gist if the
//! linked one was deleted.

mod client;
mod gist;
mod transport;

pub use client::{GistSync, SaveOutcome, SyncError, SyncResult};
pub use gist::{auth_header, Gist, GistFile, GIST_DESCRIPTION, GIST_FILENAME};
pub use transport::{
    HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportError,
    TransportResult,
};
