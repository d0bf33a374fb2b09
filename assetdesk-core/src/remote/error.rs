// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote Error Types
//!
//! Error types for calls against the remote store.

use thiserror::Error;

/// Result type for remote store operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors returned by a [`RemoteCollaborator`](super::RemoteCollaborator).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Request could not be sent or the connection broke.
    #[error("transport error: {0}")]
    Transport(String),

    /// Request did not settle within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Store answered with a non-success HTTP status.
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// Body was not the expected JSON shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Resource body exceeded the configured download cap.
    #[error("resource too large: {size} bytes (max {max})")]
    TooLarge {
        /// Actual size in bytes
        size: u64,
        /// Maximum allowed size in bytes
        max: u64,
    },

    /// Well-formed response carrying `success: false`.
    #[error("{0} rejected by remote store")]
    Rejected(&'static str),
}

impl RemoteError {
    /// Returns true for `success: false` answers, false for transport-level failures.
    pub fn is_rejection(&self) -> bool {
        matches!(self, RemoteError::Rejected(_))
    }
}

#[cfg(feature = "http-client")]
impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RemoteError::Timeout
        } else if err.is_decode() {
            RemoteError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            RemoteError::HttpStatus(status.as_u16())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}
