// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event System
//!
//! Snapshots and notifications published to the presentation layer.
//! The presentation layer subscribes and redraws; it never writes state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::resource::{Module, ResourceRecord, Scope};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Operation succeeded.
    Success,
    /// Operation failed; prior state is preserved.
    Error,
}

/// Events emitted by the resource core.
#[derive(Debug, Clone)]
pub enum AdminEvent {
    /// The record list of a scope was replaced.
    RecordsChanged {
        /// Scope the list belongs to.
        scope: Scope,
        /// Full snapshot of the new list.
        records: Vec<ResourceRecord>,
        /// Refresh counter at the time of publication.
        generation: u64,
    },

    /// The loading flag changed.
    LoadingChanged {
        /// New flag value.
        loading: bool,
    },

    /// The pending delete confirmation changed.
    PendingDeleteChanged {
        /// Record awaiting confirmation, `None` once cleared.
        pending: Option<ResourceRecord>,
    },

    /// The active content module changed.
    ModuleChanged {
        /// Newly active module.
        module: Module,
    },

    /// Transient message for the user.
    Notification {
        /// Severity.
        level: NotificationLevel,
        /// Message text.
        message: String,
    },
}

/// Event handler trait.
///
/// Implement this trait to receive resource events.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: AdminEvent);
}

/// Simple callback-based event handler.
///
/// Wraps a closure for easy event handling.
pub struct CallbackHandler<F>
where
    F: Fn(AdminEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(AdminEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(AdminEvent) + Send + Sync,
{
    fn on_event(&self, event: AdminEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
///
/// Shared between components behind an `Arc`; handlers can be added at
/// any time.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&self, handler: Arc<dyn EventHandler>) {
        self.handlers.write().push(handler);
    }

    /// Removes all handlers.
    pub fn clear_handlers(&self) {
        self.handlers.write().clear();
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Dispatches an event to all handlers.
    pub fn dispatch(&self, event: AdminEvent) {
        // Snapshot so a handler may subscribe further handlers without deadlocking.
        let handlers: Vec<_> = self.handlers.read().clone();
        for handler in &handlers {
            handler.on_event(event.clone());
        }
    }

    /// Dispatches a success notification.
    pub fn notify_success(&self, message: impl Into<String>) {
        self.dispatch(AdminEvent::Notification {
            level: NotificationLevel::Success,
            message: message.into(),
        });
    }

    /// Dispatches an error notification.
    pub fn notify_error(&self, message: impl Into<String>) {
        self.dispatch(AdminEvent::Notification {
            level: NotificationLevel::Error,
            message: message.into(),
        });
    }
}
