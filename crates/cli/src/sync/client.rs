// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gist sync client.
//!
//! Provides a high-level interface for:
//! - Storing the credential and linked gist id across runs
//! - Discovering existing tracker gists
//! - Creating, updating, and loading the snapshot gist
//! - Recovering from a linked gist that was deleted remotely

use lt_core::Snapshot;

use super::gist::{self, auth_header, Gist};
use super::transport::{
    HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportError,
};
use crate::config::RemoteConfig;
use crate::storage::{LocalStore, GIST_ID_SLOT, TOKEN_SLOT};

const ACCEPT: &str = "application/vnd.github+json";

/// Error type for sync client operations.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// No credential has been configured.
    #[error("GitHub token required\n  hint: run 'lt remote auth <token>' first")]
    AuthRequired,

    /// `load` was called with no linked gist.
    #[error("no gist linked\n  hint: run 'lt remote save' or 'lt remote link <gist-id>'")]
    NoRemoteId,

    /// The API answered with a non-success status.
    #[error("{operation} failed: {status} {reason} - {message}")]
    Remote {
        operation: &'static str,
        status: u16,
        reason: String,
        message: String,
    },

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A response or gist file was not valid JSON.
    #[error("invalid response: {0}")]
    Json(#[from] serde_json::Error),
}

impl SyncError {
    /// True when the API reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SyncError::Remote { status: 404, .. })
    }
}

/// Result type for sync client operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// What a save ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The linked gist was updated. `adopted` is set when the link was
    /// discovered during this save.
    Updated { id: String, adopted: bool },
    /// A new gist was created. `replaced` holds the stale id it superseded.
    Created { id: String, replaced: Option<String> },
}

impl SaveOutcome {
    pub fn id(&self) -> &str {
        match self {
            SaveOutcome::Updated { id, .. } | SaveOutcome::Created { id, .. } => id,
        }
    }
}

/// Sync client for the tracker gist.
pub struct GistSync<T: Transport = ReqwestTransport> {
    transport: T,
    api_url: String,
    per_page: u32,
    store: LocalStore,
    credential: Option<String>,
    remote_id: Option<String>,
}

impl GistSync<ReqwestTransport> {
    /// Create a client with the default HTTPS transport.
    pub fn new(config: &RemoteConfig, store: LocalStore) -> SyncResult<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport, store))
    }
}

impl<T: Transport> GistSync<T> {
    /// Create a client with a custom transport. The credential and gist id
    /// are read from `store`.
    pub fn with_transport(config: &RemoteConfig, transport: T, store: LocalStore) -> Self {
        GistSync {
            transport,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            per_page: config.per_page,
            credential: store.credential(),
            remote_id: store.remote_id(),
            store,
        }
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.credential.is_some()
    }

    pub fn remote_id(&self) -> Option<&str> {
        self.remote_id.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Store and persist the credential.
    pub fn set_credential(&mut self, value: &str) {
        let value = value.trim().to_string();
        self.store.write(TOKEN_SLOT, &value);
        self.credential = Some(value);
    }

    /// Link a specific gist, e.g. one created on another device.
    pub fn set_remote_resource_id(&mut self, value: &str) {
        let value = value.trim().to_string();
        self.store.write(GIST_ID_SLOT, &value);
        self.remote_id = Some(value);
    }

    fn clear_remote_id(&mut self) {
        self.store.remove(GIST_ID_SLOT);
        self.remote_id = None;
    }

    /// Forget the credential and the linked gist.
    pub fn disconnect(&mut self) {
        self.store.remove(TOKEN_SLOT);
        self.store.remove(GIST_ID_SLOT);
        self.credential = None;
        self.remote_id = None;
    }

    fn token(&self) -> SyncResult<&str> {
        self.credential.as_deref().ok_or(SyncError::AuthRequired)
    }

    fn request(&self, method: Method, path: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}{}", self.api_url, path)).header("Accept", ACCEPT)
    }

    async fn exchange(&self, operation: &'static str, request: HttpRequest) -> SyncResult<String> {
        tracing::debug!(method = %request.method, url = %request.url, "gist request");
        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response.body);
        }

        let HttpResponse {
            status,
            reason,
            body,
        } = response;
        let message = gist::error_message(&body, &reason);
        tracing::debug!(operation, status, %message, "gist request failed");
        Err(SyncError::Remote {
            operation,
            status,
            reason,
            message,
        })
    }

    /// All tracker gists owned by the credential holder.
    pub async fn list_candidate_resources(&self) -> SyncResult<Vec<Gist>> {
        let token = self.token()?;
        let request = self
            .request(Method::Get, &format!("/gists?per_page={}", self.per_page))
            .header("Authorization", auth_header(token));

        let body = self.exchange("List gists", request).await?;
        let gists: Vec<Gist> = serde_json::from_str(&body)?;
        Ok(gists.into_iter().filter(Gist::is_tracker_gist).collect())
    }

    /// Create a new private gist holding `snapshot` and link it.
    pub async fn create(&mut self, snapshot: &Snapshot) -> SyncResult<String> {
        let token = self.token()?;
        let body = gist::create_body(&snapshot.to_json_pretty().map_err(core_json)?);
        let request = self
            .request(Method::Post, "/gists")
            .header("Authorization", auth_header(token))
            .json_body(body.to_string());

        let response = self.exchange("Create gist", request).await?;
        let created: Gist = serde_json::from_str(&response)?;
        tracing::info!(id = %created.id, "created gist");
        self.set_remote_resource_id(&created.id);
        Ok(created.id)
    }

    /// Replace the snapshot file of the linked gist.
    ///
    /// Without a linked gist this fails with `AuthRequired`, the same as a
    /// missing credential.
    pub async fn update(&self, snapshot: &Snapshot) -> SyncResult<()> {
        let token = self.token()?;
        let id = self.remote_id.as_deref().ok_or(SyncError::AuthRequired)?;
        let body = gist::update_body(&snapshot.to_json_pretty().map_err(core_json)?);
        let request = self
            .request(Method::Patch, &format!("/gists/{}", id))
            .header("Authorization", auth_header(token))
            .json_body(body.to_string());

        self.exchange("Update gist", request).await?;
        Ok(())
    }

    /// Fetch the linked gist's snapshot. `None` when the gist has no
    /// tracker file. Works without a credential for public gists.
    pub async fn load(&self) -> SyncResult<Option<Snapshot>> {
        let id = self.remote_id.as_deref().ok_or(SyncError::NoRemoteId)?;
        let mut request = self.request(Method::Get, &format!("/gists/{}", id));
        if let Some(token) = self.credential.as_deref() {
            request = request.header("Authorization", auth_header(token));
        }

        let body = self.exchange("Load gist", request).await?;
        let gist: Gist = serde_json::from_str(&body)?;
        match gist.snapshot_content() {
            Some(content) => Ok(Some(serde_json::from_str(content)?)),
            None => Ok(None),
        }
    }

    /// Push `snapshot`, linking or recreating the gist as needed.
    ///
    /// Without a linked gist, the most recently updated tracker gist is
    /// adopted; failure to search is logged and ignored. When the linked gist
    /// no longer exists a new one is created in its place.
    pub async fn save(&mut self, snapshot: &Snapshot) -> SyncResult<SaveOutcome> {
        self.token()?;
        let mut adopted = false;
        if self.remote_id.is_none() {
            match self.list_candidate_resources().await {
                Ok(mut found) => {
                    found.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
                    if let Some(latest) = found.first() {
                        tracing::info!(id = %latest.id, "found existing tracker gist");
                        self.set_remote_resource_id(&latest.id);
                        adopted = true;
                    }
                }
                Err(e) => tracing::warn!("could not search for existing gists: {}", e),
            }
        }

        let Some(id) = self.remote_id.clone() else {
            let id = self.create(snapshot).await?;
            return Ok(SaveOutcome::Created { id, replaced: None });
        };

        match self.update(snapshot).await {
            Ok(()) => {
                tracing::info!(%id, "updated gist");
                Ok(SaveOutcome::Updated { id, adopted })
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!(%id, "linked gist not found, creating a new one");
                self.clear_remote_id();
                let new_id = self.create(snapshot).await?;
                Ok(SaveOutcome::Created {
                    id: new_id,
                    replaced: Some(id),
                })
            }
            Err(e) => Err(e),
        }
    }
}

/// Snapshot serialization only fails on JSON errors.
fn core_json(e: lt_core::Error) -> SyncError {
    match e {
        lt_core::Error::Json(e) => SyncError::Json(e),
        other => SyncError::Transport(TransportError::RequestFailed(other.to_string())),
    }
}
