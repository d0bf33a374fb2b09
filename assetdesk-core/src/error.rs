// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error Types
//!
//! Unified error type for resource operations.

use thiserror::Error;

use crate::download::SinkError;
use crate::remote::RemoteError;

/// Coarse classes every failure is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport, timeout, HTTP status or malformed body.
    NetworkFailure,
    /// Well-formed `success: false` response.
    RemoteRejected,
    /// Upload blocked before any network call.
    LocalQuotaExceeded,
    /// Operation refused locally without a network call.
    Local,
}

/// Unified error type for resource operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// Remote store unreachable or answered garbage.
    #[error("network failure: {0}")]
    NetworkFailure(RemoteError),

    /// Remote store answered `success: false`.
    #[error("{0} rejected by remote store")]
    RemoteRejected(&'static str),

    /// Content scope already holds the maximum number of records.
    #[error("quota exceeded: scope holds {current} of {limit} records")]
    LocalQuotaExceeded {
        /// Records currently resident
        current: usize,
        /// Configured limit
        limit: usize,
    },

    /// Confirmation requested with nothing pending.
    #[error("no delete pending confirmation")]
    NoPendingDelete,

    /// A deletion is already in flight.
    #[error("delete already in progress for {0}")]
    DeleteInFlight(String),

    /// Operation not available for this category.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Saving a downloaded file failed.
    #[error("save failed: {0}")]
    Save(#[from] SinkError),
}

impl AdminError {
    /// Maps this error onto the reporting taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdminError::NetworkFailure(_) => ErrorKind::NetworkFailure,
            AdminError::RemoteRejected(_) => ErrorKind::RemoteRejected,
            AdminError::LocalQuotaExceeded { .. } => ErrorKind::LocalQuotaExceeded,
            _ => ErrorKind::Local,
        }
    }
}

impl From<RemoteError> for AdminError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Rejected(operation) => AdminError::RemoteRejected(operation),
            other => AdminError::NetworkFailure(other),
        }
    }
}

/// Result type for resource operations.
pub type AdminResult<T> = Result<T, AdminError>;
