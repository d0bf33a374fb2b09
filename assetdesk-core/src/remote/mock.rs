// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Collaborator
//!
//! In-memory implementation of the RemoteCollaborator trait for testing.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use super::collaborator::{RemoteCollaborator, UploadFile};
use super::error::{RemoteError, RemoteResult};
use super::wire::{AckResponse, ListResponse};
use crate::path_codec::join_resource_url;
use crate::resource::{ResourceRecord, ResourceStatus, Scope, UploadTime};

/// Remote operations, used to target injected failures and gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// list
    List,
    /// upload
    Upload,
    /// use
    Use,
    /// delete
    Delete,
    /// raw fetch
    Fetch,
}

/// A call observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    /// list(scope)
    List {
        /// Listed scope
        scope: Scope,
    },
    /// upload(scope, file)
    Upload {
        /// Target scope
        scope: Scope,
        /// Uploaded filename
        file_name: String,
    },
    /// use(id, path, module)
    Use {
        /// Target scope
        scope: Scope,
        /// Record id
        id: String,
        /// Record path
        path: String,
    },
    /// delete(id, path)
    Delete {
        /// Target scope
        scope: Scope,
        /// Record id
        id: String,
        /// Record path
        path: String,
    },
    /// raw fetch
    Fetch {
        /// Fetched path
        path: String,
    },
}

impl RemoteCall {
    /// The operation of this call.
    pub fn operation(&self) -> Operation {
        match self {
            RemoteCall::List { .. } => Operation::List,
            RemoteCall::Upload { .. } => Operation::Upload,
            RemoteCall::Use { .. } => Operation::Use,
            RemoteCall::Delete { .. } => Operation::Delete,
            RemoteCall::Fetch { .. } => Operation::Fetch,
        }
    }
}

/// Outcome injected for the next call of an operation.
#[derive(Debug, Clone)]
enum Injected {
    Error(RemoteError),
    Rejected,
}

#[derive(Debug, Default)]
struct MockState {
    /// Server-side records per scope.
    records: HashMap<Scope, Vec<ResourceRecord>>,
    /// Raw bodies by path.
    resources: HashMap<String, Vec<u8>>,
    /// Scripted list bodies, consumed before server state is consulted.
    list_queue: VecDeque<ListResponse>,
    /// One-shot outcomes per operation.
    injected: HashMap<Operation, VecDeque<Injected>>,
    /// Gates holding calls in flight.
    gates: HashMap<Operation, Arc<Notify>>,
    /// Calls in arrival order.
    calls: Vec<RemoteCall>,
    /// Upload counter, used as the token prefix of stored names.
    uploads: u64,
}

/// Mock remote store for testing.
///
/// Keeps server-side records per scope and applies successful mutations
/// to them, so a refresh after a mutation observes its effect. Failures
/// can be injected per operation and calls can be held in flight.
///
/// # Example
///
/// ```ignore
/// use assetdesk_core::remote::{MockCollaborator, Operation, RemoteError};
///
/// let remote = MockCollaborator::new();
/// remote.set_records(Scope::image(), vec![record]);
/// remote.inject_error(Operation::Delete, RemoteError::Timeout);
///
/// // ... run operations ...
///
/// assert_eq!(remote.call_count(Operation::List), 1);
/// ```
#[derive(Debug)]
pub struct MockCollaborator {
    state: Mutex<MockState>,
    resource_base: String,
}

impl Default for MockCollaborator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCollaborator {
    /// Creates an empty mock store.
    pub fn new() -> Self {
        MockCollaborator {
            state: Mutex::new(MockState::default()),
            resource_base: "http://mock.local".to_string(),
        }
    }

    /// Replaces the server-side records of a scope.
    pub fn set_records(&self, scope: Scope, records: Vec<ResourceRecord>) {
        self.state.lock().records.insert(scope, records);
    }

    /// Server-side records of a scope.
    pub fn records(&self, scope: &Scope) -> Vec<ResourceRecord> {
        self.state
            .lock()
            .records
            .get(scope)
            .cloned()
            .unwrap_or_default()
    }

    /// Registers the raw body served for a path.
    pub fn set_resource(&self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.state.lock().resources.insert(path.into(), bytes.into());
    }

    /// Queues a list body returned by the next list call, whatever the scope.
    pub fn queue_list(&self, response: ListResponse) {
        self.state.lock().list_queue.push_back(response);
    }

    /// Fails the next call of `operation` with `error`.
    pub fn inject_error(&self, operation: Operation, error: RemoteError) {
        self.state
            .lock()
            .injected
            .entry(operation)
            .or_default()
            .push_back(Injected::Error(error));
    }

    /// Answers the next call of `operation` with `success: false`.
    pub fn reject_next(&self, operation: Operation) {
        self.state
            .lock()
            .injected
            .entry(operation)
            .or_default()
            .push_back(Injected::Rejected);
    }

    /// Holds every call of `operation` in flight until the returned gate is opened.
    ///
    /// Each `notify_one()` on the gate releases one call.
    pub fn hold(&self, operation: Operation) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state.lock().gates.insert(operation, gate.clone());
        gate
    }

    /// Stops holding calls of `operation`; calls already waiting stay held.
    pub fn release_hold(&self, operation: Operation) {
        self.state.lock().gates.remove(&operation);
    }

    /// All calls in arrival order.
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.state.lock().calls.clone()
    }

    /// Number of calls of one operation.
    pub fn call_count(&self, operation: Operation) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| c.operation() == operation)
            .count()
    }

    /// Total number of calls.
    pub fn total_calls(&self) -> usize {
        self.state.lock().calls.len()
    }

    /// Clears the call log.
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Records the call and returns the injected outcome and gate, if any.
    fn begin(&self, call: RemoteCall) -> (Option<Injected>, Option<Arc<Notify>>) {
        let operation = call.operation();
        let mut state = self.state.lock();
        state.calls.push(call);
        let injected = state
            .injected
            .get_mut(&operation)
            .and_then(|queue| queue.pop_front());
        let gate = state.gates.get(&operation).cloned();
        (injected, gate)
    }

    /// Waits at the gate, then resolves the injected outcome.
    ///
    /// `Ok(true)` means the call should be answered with `success: false`.
    async fn settle(call: (Option<Injected>, Option<Arc<Notify>>)) -> RemoteResult<bool> {
        let (injected, gate) = call;
        if let Some(gate) = gate {
            gate.notified().await;
        }
        match injected {
            Some(Injected::Error(err)) => Err(err),
            Some(Injected::Rejected) => Ok(true),
            None => Ok(false),
        }
    }
}

#[async_trait]
impl RemoteCollaborator for MockCollaborator {
    async fn list(&self, scope: &Scope) -> RemoteResult<ListResponse> {
        let pending = self.begin(RemoteCall::List { scope: *scope });
        if Self::settle(pending).await? {
            return Ok(ListResponse::rejected());
        }

        let mut state = self.state.lock();
        if let Some(response) = state.list_queue.pop_front() {
            return Ok(response);
        }
        let records = state.records.get(scope).cloned().unwrap_or_default();
        Ok(ListResponse::with_records(records))
    }

    async fn upload(&self, scope: &Scope, file: &UploadFile) -> RemoteResult<AckResponse> {
        let pending = self.begin(RemoteCall::Upload {
            scope: *scope,
            file_name: file.file_name.clone(),
        });
        if Self::settle(pending).await? {
            return Ok(AckResponse::rejected());
        }

        let mut state = self.state.lock();
        state.uploads += 1;
        let token = 1_700_000_000_000 + state.uploads as i64;
        let id = format!("{}-{}", token, file.file_name);
        let path = format!("uploads/{}/{}", scope.category(), id);
        state.resources.insert(path.clone(), file.bytes.clone());
        state.records.entry(*scope).or_default().push(ResourceRecord {
            id: id.clone(),
            name: id,
            path,
            status: ResourceStatus::Unused,
            upload_time: Some(UploadTime::Millis(token)),
        });
        Ok(AckResponse::ok())
    }

    async fn mark_used(&self, scope: &Scope, id: &str, path: &str) -> RemoteResult<AckResponse> {
        let pending = self.begin(RemoteCall::Use {
            scope: *scope,
            id: id.to_string(),
            path: path.to_string(),
        });
        if Self::settle(pending).await? {
            return Ok(AckResponse::rejected());
        }

        let mut state = self.state.lock();
        let found = state
            .records
            .get_mut(scope)
            .and_then(|records| records.iter_mut().find(|r| r.id == id));
        match found {
            Some(record) => {
                record.status = ResourceStatus::Used;
                Ok(AckResponse::ok())
            }
            None => Ok(AckResponse::rejected()),
        }
    }

    async fn delete(&self, scope: &Scope, id: &str, path: &str) -> RemoteResult<AckResponse> {
        let pending = self.begin(RemoteCall::Delete {
            scope: *scope,
            id: id.to_string(),
            path: path.to_string(),
        });
        if Self::settle(pending).await? {
            return Ok(AckResponse::rejected());
        }

        let mut state = self.state.lock();
        let Some(records) = state.records.get_mut(scope) else {
            return Ok(AckResponse::rejected());
        };
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(AckResponse::rejected());
        }
        state.resources.remove(path);
        Ok(AckResponse::ok())
    }

    async fn fetch(&self, path: &str) -> RemoteResult<Vec<u8>> {
        let pending = self.begin(RemoteCall::Fetch {
            path: path.to_string(),
        });
        if Self::settle(pending).await? {
            return Err(RemoteError::HttpStatus(404));
        }

        self.state
            .lock()
            .resources
            .get(path)
            .cloned()
            .ok_or(RemoteError::HttpStatus(404))
    }

    fn resource_url(&self, path: &str) -> String {
        join_resource_url(&self.resource_base, path)
    }
}
