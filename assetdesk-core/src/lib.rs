// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! AssetDesk Core Library
//!
//! Keeps a client-side view of a remote asset store (images, module-scoped
//! content documents, markdown files) consistent across upload, use and
//! delete. The remote store is the sole source of truth: every mutation
//! is followed by a full refresh of the affected scope.

pub mod config;
pub mod coordinator;
pub mod download;
pub mod error;
pub mod events;
pub mod panel;
pub mod path_codec;
pub mod remote;
pub mod resource;
pub mod selector;

pub use config::AdminConfig;
pub use coordinator::{DeleteState, MutationCoordinator};
pub use download::{DirectorySink, DownloadSink, MemorySink, SinkError};
pub use error::{AdminError, AdminResult, ErrorKind};
pub use events::{AdminEvent, CallbackHandler, EventDispatcher, EventHandler, NotificationLevel};
pub use panel::AssetPanel;
pub use path_codec::{derive_download_name, display_name};
#[cfg(feature = "http-client")]
pub use remote::HttpCollaborator;
pub use remote::{
    AckResponse, ListResponse, MockCollaborator, RemoteCollaborator, RemoteError, UploadFile,
};
pub use resource::{
    Category, Module, ResourceRecord, ResourceStatus, ResourceStore, Scope, UploadTime,
    CONTENT_QUOTA,
};
pub use selector::ModuleSelector;
