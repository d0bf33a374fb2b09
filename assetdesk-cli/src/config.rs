// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use std::time::Duration;

use anyhow::{bail, Result};
use assetdesk_core::{AdminConfig, Category, Module, Scope};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Address of the store API.
    pub base_url: String,
    /// Address raw resources are served from, if not the API address.
    pub resource_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Proxy URL.
    pub proxy_url: Option<String>,
}

impl CliConfig {
    /// Builds the core client configuration.
    pub fn admin_config(&self) -> Result<AdminConfig> {
        let mut config = AdminConfig::with_base_url(&self.base_url)
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(resource_url) = &self.resource_url {
            config = config.with_resource_url(resource_url);
        }
        if let Some(proxy_url) = &self.proxy_url {
            config = config.with_proxy(proxy_url);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Resolves the scope a command runs against.
///
/// Content defaults to the first module; other categories take no module.
pub fn resolve_scope(category: Category, module: Option<Module>) -> Result<Scope> {
    match (category, module) {
        (Category::Content, module) => Ok(Scope::content(module.unwrap_or_default())),
        (category, None) => Ok(Scope::for_category(category)),
        (category, Some(module)) => {
            bail!("{} resources have no modules (got --module {})", category, module)
        }
    }
}
