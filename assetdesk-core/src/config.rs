// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the remote store client
//!
//! Base addresses vary by deployment; they are injected once at startup
//! instead of living in global state.

use std::time::Duration;

use crate::error::{AdminError, AdminResult};
use crate::resource::CONTENT_QUOTA;

/// Default address of the remote store.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Configuration for the remote store client
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Address of the API endpoints (e.g., "http://localhost:3001")
    pub base_url: String,

    /// Address raw resources are served from; `None` means `base_url`
    pub resource_url: Option<String>,

    /// HTTP timeout for every request
    pub timeout: Duration,

    /// Maximum size of a downloaded resource (bytes)
    pub max_download_size: u64,

    /// Proxy URL
    pub proxy_url: Option<String>,

    /// Maximum resident records per content scope
    pub content_quota: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_url: None,
            timeout: Duration::from_secs(30),
            max_download_size: 50 * 1024 * 1024, // 50 MB
            proxy_url: None,
            content_quota: CONTENT_QUOTA,
        }
    }
}

impl AdminConfig {
    /// Creates a configuration for the given store address.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        AdminConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Serve raw resources from a separate address.
    pub fn with_resource_url(mut self, resource_url: impl Into<String>) -> Self {
        self.resource_url = Some(resource_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure with custom proxy
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Address raw resources are fetched from.
    pub fn resource_base(&self) -> &str {
        self.resource_url.as_deref().unwrap_or(&self.base_url)
    }

    /// Checks that both addresses are usable http(s) URLs.
    pub fn validate(&self) -> AdminResult<()> {
        check_http_url("base_url", &self.base_url)?;
        if let Some(resource_url) = &self.resource_url {
            check_http_url("resource_url", resource_url)?;
        }
        if self.timeout.is_zero() {
            return Err(AdminError::Configuration("timeout must be non-zero".into()));
        }
        Ok(())
    }
}

fn check_http_url(field: &str, url: &str) -> AdminResult<()> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AdminError::Configuration(format!("{} is empty", field)));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AdminError::Configuration(format!(
            "{} must start with http:// or https://: {}",
            field, url
        )));
    }
    Ok(())
}
