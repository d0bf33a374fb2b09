// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote Store Layer
//!
//! The remote store is the sole source of truth. This layer only moves
//! requests and responses:
//! - **Collaborator trait**: list / upload / use / delete / fetch per scope
//! - **Wire types**: `{ success, data }` and `{ success }` bodies
//! - **HTTP collaborator**: reqwest implementation (feature `http-client`)
//! - **Mock collaborator**: scriptable in-memory store for tests

mod collaborator;
mod error;
#[cfg(feature = "http-client")]
mod http;
mod mock;
mod wire;

pub use collaborator::{RemoteCollaborator, UploadFile};
pub use error::{RemoteError, RemoteResult};
#[cfg(feature = "http-client")]
pub use http::HttpCollaborator;
pub use mock::{MockCollaborator, Operation, RemoteCall};
pub use wire::{AckResponse, ListResponse};
