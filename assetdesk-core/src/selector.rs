// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module Selector
//!
//! Tracks the active content module and re-scopes the store and the
//! coordinator when it changes.

use std::sync::Arc;

use tracing::{info, warn};

use crate::coordinator::MutationCoordinator;
use crate::error::{AdminError, AdminResult};
use crate::events::{AdminEvent, EventDispatcher};
use crate::remote::RemoteCollaborator;
use crate::resource::{Module, ResourceStore, Scope};

/// Switches the module a content panel works on.
pub struct ModuleSelector {
    remote: Arc<dyn RemoteCollaborator>,
    store: Arc<ResourceStore>,
    coordinator: Arc<MutationCoordinator>,
    events: Arc<EventDispatcher>,
}

impl ModuleSelector {
    /// Creates a selector driving `store` and `coordinator`.
    pub fn new(
        remote: Arc<dyn RemoteCollaborator>,
        store: Arc<ResourceStore>,
        coordinator: Arc<MutationCoordinator>,
        events: Arc<EventDispatcher>,
    ) -> Self {
        ModuleSelector {
            remote,
            store,
            coordinator,
            events,
        }
    }

    /// The active module, `None` for categories without modules.
    pub fn active_module(&self) -> Option<Module> {
        self.coordinator.scope().module()
    }

    /// The fixed set of selectable modules.
    pub fn modules(&self) -> &'static [Module] {
        &Module::ALL
    }

    /// Makes `module` active and lists it.
    ///
    /// Discards a delete awaiting confirmation in the old module and the
    /// old module's records, then issues exactly one refresh for the new
    /// scope. Re-selecting the active module refreshes it as well.
    pub async fn select_module(&self, module: Module) -> AdminResult<usize> {
        let current = self.coordinator.scope();
        if !current.category().is_modular() {
            let err = AdminError::Unsupported(format!(
                "{} resources are not partitioned by module",
                current.category()
            ));
            warn!(scope = %current, error = %err, "module switch refused");
            self.events.notify_error(err.to_string());
            return Err(err);
        }

        let scope = Scope::content(module);
        self.coordinator.rescope(scope);
        self.store.discard(scope);
        info!(from = %current, to = %scope, "module selected");
        self.events.dispatch(AdminEvent::ModuleChanged { module });

        self.store.refresh(self.remote.as_ref(), &scope).await
    }
}
