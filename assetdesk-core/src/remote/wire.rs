// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Response bodies of the remote store's JSON endpoints.

use serde::{Deserialize, Serialize};

use super::error::{RemoteError, RemoteResult};
use crate::resource::ResourceRecord;

fn default_success() -> bool {
    true
}

/// Body of a list endpoint: `{ success, data }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    /// Absent counts as success; older list endpoints omit it.
    #[serde(default = "default_success")]
    pub success: bool,
    /// Records in store order. Absent or null counts as empty.
    #[serde(default)]
    pub data: Option<Vec<ResourceRecord>>,
}

impl ListResponse {
    /// A successful response carrying `records`.
    pub fn with_records(records: Vec<ResourceRecord>) -> Self {
        ListResponse {
            success: true,
            data: Some(records),
        }
    }

    /// A successful response with the `data` field missing.
    pub fn without_data() -> Self {
        ListResponse {
            success: true,
            data: None,
        }
    }

    /// A `success: false` response.
    pub fn rejected() -> Self {
        ListResponse {
            success: false,
            data: None,
        }
    }

    /// Unwraps the record list, defaulting a missing list to empty.
    pub fn into_records(self) -> RemoteResult<Vec<ResourceRecord>> {
        if !self.success {
            return Err(RemoteError::Rejected("list"));
        }
        Ok(self.data.unwrap_or_default())
    }
}

/// Body of a mutation endpoint: `{ success }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    /// Absent counts as failure.
    #[serde(default)]
    pub success: bool,
}

impl AckResponse {
    /// A `success: true` acknowledgment.
    pub fn ok() -> Self {
        AckResponse { success: true }
    }

    /// A `success: false` acknowledgment.
    pub fn rejected() -> Self {
        AckResponse { success: false }
    }

    /// Maps `success: false` to [`RemoteError::Rejected`] for `operation`.
    pub fn into_result(self, operation: &'static str) -> RemoteResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(RemoteError::Rejected(operation))
        }
    }
}
