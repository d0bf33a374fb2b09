// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resource model and client-side store
//!
//! Records are snapshots of the remote store's list endpoints. They are
//! never built or patched locally; every mutation is followed by a full
//! refresh of the scope.

mod store;
mod types;

pub use store::ResourceStore;
pub use types::{
    Category, Module, ParseScopeError, ResourceRecord, ResourceStatus, Scope, UploadTime,
    CONTENT_QUOTA,
};
