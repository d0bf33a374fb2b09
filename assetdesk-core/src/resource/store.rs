// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resource Store
//!
//! Client-side view of one category's records. The store is the only
//! writer of its records and loading flag; everything else reads
//! snapshots or subscribes to [`AdminEvent`]s.
//!
//! A refresh never cancels an earlier one. Whichever response lands last
//! wins, provided it was listed for the scope the store currently targets;
//! a list for a scope the store has been moved away from is dropped.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::types::{ResourceRecord, Scope};
use crate::error::AdminResult;
use crate::events::{AdminEvent, EventDispatcher, EventHandler};
use crate::remote::RemoteCollaborator;

#[derive(Debug, Default)]
struct StoreState {
    /// Scope the records were listed under.
    scope: Option<Scope>,
    /// Records in store order.
    records: Vec<ResourceRecord>,
    /// Refreshes currently awaiting the remote store.
    in_flight: usize,
    /// Successful refreshes applied so far.
    generation: u64,
}

/// In-memory cache of the records of the current scope.
pub struct ResourceStore {
    state: Mutex<StoreState>,
    events: Arc<EventDispatcher>,
}

/// Keeps the loading flag raised while alive.
///
/// Dropping it lowers the flag on every exit path of a refresh,
/// including a cancelled or unwinding future.
struct LoadingGuard<'a> {
    store: &'a ResourceStore,
}

impl<'a> LoadingGuard<'a> {
    fn new(store: &'a ResourceStore) -> Self {
        let raised = {
            let mut state = store.state.lock();
            state.in_flight += 1;
            state.in_flight == 1
        };
        if raised {
            store
                .events
                .dispatch(AdminEvent::LoadingChanged { loading: true });
        }
        LoadingGuard { store }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let lowered = {
            let mut state = self.store.state.lock();
            state.in_flight = state.in_flight.saturating_sub(1);
            state.in_flight == 0
        };
        if lowered {
            self.store
                .events
                .dispatch(AdminEvent::LoadingChanged { loading: false });
        }
    }
}

impl ResourceStore {
    /// Creates an empty store publishing to `events`.
    pub fn new(events: Arc<EventDispatcher>) -> Self {
        ResourceStore {
            state: Mutex::new(StoreState::default()),
            events,
        }
    }

    /// Replaces the records with the remote store's list for `scope`.
    ///
    /// The first refresh sets the target scope; later ones only apply if
    /// `scope` is still the target (see [`ResourceStore::discard`]). On
    /// failure the previous records stay untouched and an error
    /// notification is published. Returns the number of records listed.
    pub async fn refresh(&self, remote: &dyn RemoteCollaborator, scope: &Scope) -> AdminResult<usize> {
        let _loading = LoadingGuard::new(self);
        debug!(%scope, "refreshing");

        let listed = remote.list(scope).await.and_then(|r| r.into_records());

        match listed {
            Ok(records) => Ok(self.apply(*scope, records)),
            Err(err) => {
                warn!(%scope, error = %err, "refresh failed, keeping previous records");
                self.events
                    .notify_error(format!("Failed to load {} list: {}", scope, err));
                Err(err.into())
            }
        }
    }

    /// Drops the records of a previous scope without contacting the store
    /// and makes `scope` the target scope.
    ///
    /// Used on scope switches so one scope's records never show under
    /// another, including from a list of the old scope still in flight.
    pub fn discard(&self, scope: Scope) {
        {
            let mut state = self.state.lock();
            if state.scope == Some(scope) && state.records.is_empty() {
                return;
            }
            state.scope = Some(scope);
            state.records.clear();
        }
        self.publish();
    }

    fn apply(&self, scope: Scope, records: Vec<ResourceRecord>) -> usize {
        let count = records.len();
        {
            let mut state = self.state.lock();
            if let Some(target) = state.scope.filter(|target| *target != scope) {
                debug!(%scope, %target, count, "dropping list of a previous scope");
                return count;
            }
            state.scope = Some(scope);
            state.records = records;
            state.generation += 1;
        }
        debug!(%scope, count, "records replaced");
        self.publish();
        count
    }

    fn publish(&self) {
        let event = {
            let state = self.state.lock();
            let Some(scope) = state.scope else {
                return;
            };
            AdminEvent::RecordsChanged {
                scope,
                records: state.records.clone(),
                generation: state.generation,
            }
        };
        self.events.dispatch(event);
    }

    /// Snapshot of the current records.
    pub fn records(&self) -> Vec<ResourceRecord> {
        self.state.lock().records.clone()
    }

    /// Number of resident records.
    pub fn len(&self) -> usize {
        self.state.lock().records.len()
    }

    /// Returns true if no records are resident.
    pub fn is_empty(&self) -> bool {
        self.state.lock().records.is_empty()
    }

    /// Returns true while at least one refresh is awaiting the store.
    pub fn loading(&self) -> bool {
        self.state.lock().in_flight > 0
    }

    /// Scope of the resident records, `None` before the first refresh.
    pub fn scope(&self) -> Option<Scope> {
        self.state.lock().scope
    }

    /// Number of successful refreshes applied.
    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }

    /// Looks up a resident record by id.
    pub fn find(&self, id: &str) -> Option<ResourceRecord> {
        self.state
            .lock()
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Registers a handler for store events.
    pub fn subscribe(&self, handler: Arc<dyn EventHandler>) {
        self.events.add_handler(handler);
    }
}
