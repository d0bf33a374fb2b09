// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Asset Panel
//!
//! One category's store, coordinator and module selector wired together.
//! This is the surface the presentation layer calls: it reads `records`,
//! `loading` and `pending_delete`, subscribes to events, and triggers
//! operations.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use crate::coordinator::{DeleteState, MutationCoordinator};
use crate::download::DownloadSink;
use crate::error::AdminResult;
use crate::events::{EventDispatcher, EventHandler};
use crate::remote::{RemoteCollaborator, UploadFile};
use crate::resource::{Category, Module, ResourceRecord, ResourceStore, Scope, CONTENT_QUOTA};
use crate::selector::ModuleSelector;

#[cfg(feature = "http-client")]
use crate::config::AdminConfig;
#[cfg(feature = "http-client")]
use crate::remote::HttpCollaborator;

/// Resource management for one category.
///
/// # Example
///
/// ```ignore
/// use assetdesk_core::{AdminConfig, AssetPanel, Category, Module};
///
/// let panel = AssetPanel::connect(&AdminConfig::default(), Category::Content)?;
/// panel.select_module(Module::Products).await?;
///
/// for record in panel.records() {
///     println!("{} {:?}", record.name, record.status);
/// }
/// ```
pub struct AssetPanel {
    remote: Arc<dyn RemoteCollaborator>,
    events: Arc<EventDispatcher>,
    store: Arc<ResourceStore>,
    coordinator: Arc<MutationCoordinator>,
    selector: ModuleSelector,
}

impl AssetPanel {
    /// Creates a panel for `scope` with the default content quota.
    pub fn new(remote: Arc<dyn RemoteCollaborator>, scope: Scope) -> Self {
        Self::with_quota(remote, scope, CONTENT_QUOTA)
    }

    /// Creates a panel for `scope` with a custom content quota.
    pub fn with_quota(remote: Arc<dyn RemoteCollaborator>, scope: Scope, quota: usize) -> Self {
        let events = Arc::new(EventDispatcher::new());
        let store = Arc::new(ResourceStore::new(events.clone()));
        let coordinator = Arc::new(MutationCoordinator::new(
            remote.clone(),
            store.clone(),
            events.clone(),
            scope,
            quota,
        ));
        let selector = ModuleSelector::new(
            remote.clone(),
            store.clone(),
            coordinator.clone(),
            events.clone(),
        );

        AssetPanel {
            remote,
            events,
            store,
            coordinator,
            selector,
        }
    }

    /// Creates a panel talking HTTP to the store described by `config`.
    #[cfg(feature = "http-client")]
    pub fn connect(config: &AdminConfig, category: Category) -> AdminResult<Self> {
        let remote = Arc::new(HttpCollaborator::new(config)?);
        Ok(Self::with_quota(
            remote,
            Scope::for_category(category),
            config.content_quota,
        ))
    }

    // --- State ---

    /// The scope the panel works on.
    pub fn scope(&self) -> Scope {
        self.coordinator.scope()
    }

    /// The category the panel works on.
    pub fn category(&self) -> Category {
        self.scope().category()
    }

    /// Snapshot of the listed records.
    pub fn records(&self) -> Vec<ResourceRecord> {
        self.store.records()
    }

    /// Returns true while a refresh is in flight.
    pub fn loading(&self) -> bool {
        self.store.loading()
    }

    /// Record awaiting delete confirmation or deletion.
    pub fn pending_delete(&self) -> Option<ResourceRecord> {
        self.coordinator.pending_delete()
    }

    /// State of the delete flow.
    pub fn delete_state(&self) -> DeleteState {
        self.coordinator.delete_state()
    }

    /// Upload limit applied to content scopes.
    pub fn quota(&self) -> usize {
        self.coordinator.quota()
    }

    /// Looks up a listed record by id.
    pub fn find(&self, id: &str) -> Option<ResourceRecord> {
        self.store.find(id)
    }

    /// Registers a handler for panel events.
    pub fn subscribe(&self, handler: Arc<dyn EventHandler>) {
        self.events.add_handler(handler);
    }

    // --- Operations ---

    /// Lists the current scope.
    pub async fn refresh(&self) -> AdminResult<usize> {
        let scope = self.scope();
        self.store.refresh(self.remote.as_ref(), &scope).await
    }

    /// Uploads a file into the current scope.
    pub async fn upload(&self, file: UploadFile) -> AdminResult<()> {
        self.coordinator.upload(file).await
    }

    /// Marks a record as in use; `Ok(false)` if it already was.
    pub async fn mark_used(&self, record: &ResourceRecord) -> AdminResult<bool> {
        self.coordinator.mark_used(record).await
    }

    /// Asks for confirmation before deleting `record`.
    pub fn request_delete(&self, record: &ResourceRecord) -> AdminResult<()> {
        self.coordinator.request_delete(record)
    }

    /// Deletes the record awaiting confirmation.
    pub async fn confirm_delete(&self) -> AdminResult<()> {
        self.coordinator.confirm_delete().await
    }

    /// Drops the pending delete request.
    pub fn cancel_delete(&self) -> bool {
        self.coordinator.cancel_delete()
    }

    /// Saves a record through `sink` under its derived download name.
    pub async fn download(
        &self,
        record: &ResourceRecord,
        sink: &dyn DownloadSink,
    ) -> AdminResult<PathBuf> {
        self.coordinator.download(record, sink).await
    }

    /// Switches the active content module.
    pub async fn select_module(&self, module: Module) -> AdminResult<usize> {
        self.selector.select_module(module).await
    }

    /// The active content module.
    pub fn active_module(&self) -> Option<Module> {
        self.selector.active_module()
    }

    /// The selectable content modules.
    pub fn modules(&self) -> &'static [Module] {
        self.selector.modules()
    }

    /// Full fetchable URL of a record, for copying or image preview.
    pub fn resource_url(&self, record: &ResourceRecord) -> String {
        self.remote.resource_url(&record.path)
    }

    /// Fetches a text resource (markdown) for inline preview.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub async fn preview_text(&self, record: &ResourceRecord) -> AdminResult<String> {
        match self.remote.fetch(&record.path).await {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(err) => {
                warn!(id = %record.id, error = %err, "preview failed");
                self.events
                    .notify_error(format!("Preview failed: {}", err));
                Err(err.into())
            }
        }
    }

    /// The panel's store.
    pub fn store(&self) -> &ResourceStore {
        &self.store
    }

    /// The panel's coordinator.
    pub fn coordinator(&self) -> &MutationCoordinator {
        &self.coordinator
    }
}
