// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote Collaborator Trait
//!
//! Contract of the remote store the core treats as opaque and
//! authoritative.

use std::path::Path;

use async_trait::async_trait;

use super::error::RemoteResult;
use super::wire::{AckResponse, ListResponse};
use crate::resource::Scope;

/// A file to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Filename sent with the multipart part
    pub file_name: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Creates an upload from in-memory contents.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        UploadFile {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk, keeping its final path component as filename.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(UploadFile { file_name, bytes })
    }

    /// Size of the contents in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Remote store operations, per scope.
///
/// Implementations only move requests and responses; interpreting
/// `success` flags, quotas and refresh ordering is left to the caller.
///
/// # Example
///
/// ```ignore
/// use assetdesk_core::remote::{MockCollaborator, RemoteCollaborator, ListResponse};
/// use assetdesk_core::resource::Scope;
///
/// let remote = MockCollaborator::new();
/// remote.queue_list(ListResponse::with_records(vec![]));
/// let response = remote.list(&Scope::image()).await?;
/// ```
#[async_trait]
pub trait RemoteCollaborator: Send + Sync {
    /// Lists the records of a scope.
    async fn list(&self, scope: &Scope) -> RemoteResult<ListResponse>;

    /// Uploads a file into a scope.
    async fn upload(&self, scope: &Scope, file: &UploadFile) -> RemoteResult<AckResponse>;

    /// Marks a record as the scope's in-use resource.
    async fn mark_used(&self, scope: &Scope, id: &str, path: &str) -> RemoteResult<AckResponse>;

    /// Deletes a record.
    async fn delete(&self, scope: &Scope, id: &str, path: &str) -> RemoteResult<AckResponse>;

    /// Fetches the raw bytes behind a record path.
    async fn fetch(&self, path: &str) -> RemoteResult<Vec<u8>>;

    /// Full fetchable URL of a record path.
    fn resource_url(&self, path: &str) -> String;
}
