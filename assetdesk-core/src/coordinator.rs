// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mutation Coordinator
//!
//! Runs upload / use / delete / download against the remote store for the
//! current scope and refreshes the [`ResourceStore`] once a mutation is
//! acknowledged. Nothing is applied optimistically: a record's status and
//! presence only ever change through a refresh.
//!
//! Deletion goes through a confirmation step:
//!
//! ```text
//! Idle --request--> PendingConfirmation --cancel--> Idle
//!                   PendingConfirmation --confirm--> Deleting --settled--> Idle
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::download::DownloadSink;
use crate::error::{AdminError, AdminResult};
use crate::events::{AdminEvent, EventDispatcher};
use crate::path_codec::derive_download_name;
use crate::remote::{RemoteCollaborator, UploadFile};
use crate::resource::{ResourceRecord, ResourceStore, Scope};

/// State of the delete confirmation flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteState {
    /// No deletion requested.
    #[default]
    Idle,
    /// Waiting for the user to confirm. `scope` is where the record was listed.
    PendingConfirmation {
        record: ResourceRecord,
        scope: Scope,
    },
    /// Confirmed; the remote call has not settled yet.
    Deleting {
        record: ResourceRecord,
        scope: Scope,
    },
}

impl DeleteState {
    /// The record awaiting confirmation or deletion.
    pub fn record(&self) -> Option<&ResourceRecord> {
        match self {
            DeleteState::Idle => None,
            DeleteState::PendingConfirmation { record, .. }
            | DeleteState::Deleting { record, .. } => Some(record),
        }
    }

    /// The scope the record was requested for deletion in.
    pub fn scope(&self) -> Option<Scope> {
        match self {
            DeleteState::Idle => None,
            DeleteState::PendingConfirmation { scope, .. }
            | DeleteState::Deleting { scope, .. } => Some(*scope),
        }
    }
}

/// Executes mutations for one category and keeps its store in step.
pub struct MutationCoordinator {
    remote: Arc<dyn RemoteCollaborator>,
    store: Arc<ResourceStore>,
    events: Arc<EventDispatcher>,
    scope: Mutex<Scope>,
    delete: Mutex<DeleteState>,
    quota: usize,
}

/// Returns the delete flow to idle once a confirmed deletion settles,
/// including when the deleting future is dropped.
struct DeletingGuard<'a> {
    coordinator: &'a MutationCoordinator,
    id: String,
}

impl Drop for DeletingGuard<'_> {
    fn drop(&mut self) {
        let cleared = {
            let mut state = self.coordinator.delete.lock();
            let settled =
                matches!(&*state, DeleteState::Deleting { record, .. } if record.id == self.id);
            if settled {
                *state = DeleteState::Idle;
            }
            settled
        };
        if cleared {
            self.coordinator
                .events
                .dispatch(AdminEvent::PendingDeleteChanged { pending: None });
        }
    }
}

impl MutationCoordinator {
    /// Creates a coordinator for `scope`.
    ///
    /// `quota` bounds uploads into categories with a quota.
    pub fn new(
        remote: Arc<dyn RemoteCollaborator>,
        store: Arc<ResourceStore>,
        events: Arc<EventDispatcher>,
        scope: Scope,
        quota: usize,
    ) -> Self {
        MutationCoordinator {
            remote,
            store,
            events,
            scope: Mutex::new(scope),
            delete: Mutex::new(DeleteState::Idle),
            quota,
        }
    }

    /// The scope mutations run against.
    pub fn scope(&self) -> Scope {
        *self.scope.lock()
    }

    /// Upload limit for categories with a quota.
    pub fn quota(&self) -> usize {
        self.quota
    }

    /// Moves to a new scope, discarding a delete still awaiting confirmation.
    ///
    /// A deletion already in flight is left to settle. Returns the previous scope.
    pub fn rescope(&self, scope: Scope) -> Scope {
        let previous = std::mem::replace(&mut *self.scope.lock(), scope);
        self.discard_pending();
        previous
    }

    /// Uploads a file into the current scope.
    ///
    /// Rejected without a network call when the scope has a quota and
    /// already holds that many records.
    pub async fn upload(&self, file: UploadFile) -> AdminResult<()> {
        let scope = self.scope();

        if scope.category().has_quota() {
            let current = self.store.len();
            if current >= self.quota {
                let err = AdminError::LocalQuotaExceeded {
                    current,
                    limit: self.quota,
                };
                return Err(self.fail("Upload", &scope, err));
            }
        }

        let acked = self
            .remote
            .upload(&scope, &file)
            .await
            .and_then(|ack| ack.into_result("upload"));
        if let Err(err) = acked {
            return Err(self.fail("Upload", &scope, err.into()));
        }

        info!(%scope, file = %file.file_name, "uploaded");
        self.refresh_if_current(&scope).await;
        self.events
            .notify_success(format!("Uploaded {}", file.file_name));
        Ok(())
    }

    /// Marks a record as the scope's in-use resource.
    ///
    /// Returns `Ok(false)` without contacting the store when the record is
    /// already in use.
    pub async fn mark_used(&self, record: &ResourceRecord) -> AdminResult<bool> {
        let scope = self.scope();

        if !scope.category().supports_use() {
            let err = AdminError::Unsupported(format!(
                "{} resources cannot be marked as used",
                scope.category()
            ));
            return Err(self.fail("Use", &scope, err));
        }

        if record.is_used() {
            debug!(%scope, id = %record.id, "already in use");
            return Ok(false);
        }

        let acked = self
            .remote
            .mark_used(&scope, &record.id, &record.path)
            .await
            .and_then(|ack| ack.into_result("use"));
        if let Err(err) = acked {
            return Err(self.fail("Use", &scope, err.into()));
        }

        info!(%scope, id = %record.id, "marked used");
        self.refresh_if_current(&scope).await;
        self.events.notify_success("Marked as in use");
        Ok(true)
    }

    /// Asks for confirmation before deleting `record` from the current scope.
    ///
    /// Replaces an earlier request still awaiting confirmation.
    pub fn request_delete(&self, record: &ResourceRecord) -> AdminResult<()> {
        {
            let mut state = self.delete.lock();
            if let DeleteState::Deleting { record: in_flight, .. } = &*state {
                return Err(AdminError::DeleteInFlight(in_flight.id.clone()));
            }
            *state = DeleteState::PendingConfirmation {
                record: record.clone(),
                scope: self.scope(),
            };
        }
        debug!(id = %record.id, "delete pending confirmation");
        self.events.dispatch(AdminEvent::PendingDeleteChanged {
            pending: Some(record.clone()),
        });
        Ok(())
    }

    /// Deletes the record awaiting confirmation.
    ///
    /// The call targets the scope the deletion was requested in, even if
    /// the coordinator has been rescoped since. The pending record is
    /// cleared whatever the outcome. The store is refreshed only on
    /// success; on failure the record stays listed.
    pub async fn confirm_delete(&self) -> AdminResult<()> {
        let (record, scope) = {
            let mut state = self.delete.lock();
            let (record, scope) = match &*state {
                DeleteState::Idle => return Err(AdminError::NoPendingDelete),
                DeleteState::Deleting { record, .. } => {
                    return Err(AdminError::DeleteInFlight(record.id.clone()))
                }
                DeleteState::PendingConfirmation { record, scope } => (record.clone(), *scope),
            };
            *state = DeleteState::Deleting {
                record: record.clone(),
                scope,
            };
            (record, scope)
        };
        let guard = DeletingGuard {
            coordinator: self,
            id: record.id.clone(),
        };

        let acked = self
            .remote
            .delete(&scope, &record.id, &record.path)
            .await
            .and_then(|ack| ack.into_result("delete"));
        drop(guard);

        if let Err(err) = acked {
            return Err(self.fail("Delete", &scope, err.into()));
        }

        info!(%scope, id = %record.id, "deleted");
        self.refresh_if_current(&scope).await;
        self.events.notify_success("Deleted");
        Ok(())
    }

    /// Drops the pending request without contacting the store.
    ///
    /// Returns false if nothing was pending or a deletion is already in flight.
    pub fn cancel_delete(&self) -> bool {
        self.discard_pending()
    }

    /// Fetches a record's bytes and saves them under its derived download name.
    pub async fn download(
        &self,
        record: &ResourceRecord,
        sink: &dyn DownloadSink,
    ) -> AdminResult<PathBuf> {
        let scope = self.scope();
        let bytes = match self.remote.fetch(&record.path).await {
            Ok(bytes) => bytes,
            Err(err) => return Err(self.fail("Download", &scope, err.into())),
        };

        let file_name = derive_download_name(record.download_source());
        let saved = sink
            .save(&file_name, &bytes)
            .map_err(|err| self.fail("Download", &scope, err.into()))?;

        info!(id = %record.id, path = %saved.display(), "downloaded");
        self.events
            .notify_success(format!("Saved {}", saved.display()));
        Ok(saved)
    }

    /// The record awaiting confirmation or deletion.
    pub fn pending_delete(&self) -> Option<ResourceRecord> {
        self.delete.lock().record().cloned()
    }

    /// Current state of the delete flow.
    pub fn delete_state(&self) -> DeleteState {
        self.delete.lock().clone()
    }

    fn discard_pending(&self) -> bool {
        let cleared = {
            let mut state = self.delete.lock();
            if matches!(*state, DeleteState::PendingConfirmation { .. }) {
                *state = DeleteState::Idle;
                true
            } else {
                false
            }
        };
        if cleared {
            self.events
                .dispatch(AdminEvent::PendingDeleteChanged { pending: None });
        }
        cleared
    }

    /// Refreshes after a mutation, unless the scope moved on meanwhile.
    ///
    /// A scope switch issues its own refresh; refresh failures are already
    /// reported by the store.
    async fn refresh_if_current(&self, scope: &Scope) {
        if self.scope() != *scope {
            debug!(%scope, "scope changed during mutation, skipping refresh");
            return;
        }
        let _ = self.store.refresh(self.remote.as_ref(), scope).await;
    }

    fn fail(&self, action: &str, scope: &Scope, err: AdminError) -> AdminError {
        warn!(%scope, action, error = %err, "operation failed");
        self.events
            .notify_error(format!("{} failed: {}", action, err));
        err
    }
}
