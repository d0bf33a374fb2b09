// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP collaborator for the remote store
//!
//! This module provides the reqwest-backed store client with:
//! - Per-category endpoint routing
//! - Multipart uploads with a category/module discriminator
//! - Size limits on raw resource fetches
//! - Proxy and timeout configuration

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use tracing::{debug, warn};

use super::collaborator::{RemoteCollaborator, UploadFile};
use super::error::{RemoteError, RemoteResult};
use super::wire::{AckResponse, ListResponse};
use crate::config::AdminConfig;
use crate::error::{AdminError, AdminResult};
use crate::path_codec::join_resource_url;
use crate::resource::{Category, Scope};

/// Endpoint kinds of the store API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    List,
    Upload,
    Use,
    Delete,
}

/// Path of an endpoint for a category, if the category has it.
fn endpoint_path(category: Category, endpoint: Endpoint) -> Option<&'static str> {
    let path = match (category, endpoint) {
        (Category::Image, Endpoint::List) => "/img/list",
        (Category::Image, Endpoint::Upload) => "/img/upload",
        (Category::Image, Endpoint::Delete) => "/img/del",
        (Category::Content, Endpoint::List) => "/content/list",
        (Category::Content, Endpoint::Upload) => "/content/upload",
        (Category::Content, Endpoint::Use) => "/content/use",
        (Category::Content, Endpoint::Delete) => "/content/del",
        (Category::Markdown, Endpoint::List) => "/markdown/list",
        (Category::Markdown, Endpoint::Upload) => "/markdown/upload",
        (Category::Markdown, Endpoint::Delete) => "/markdown/del",
        (_, Endpoint::Use) => return None,
    };
    Some(path)
}

/// Value of the `class` discriminator for categories without modules.
fn upload_class(category: Category) -> &'static str {
    match category {
        Category::Markdown => "markdown",
        _ => "default",
    }
}

/// Talks to the remote store over HTTP.
pub struct HttpCollaborator {
    client: Client,
    base_url: String,
    resource_base: String,
    max_download_size: u64,
}

impl HttpCollaborator {
    /// Create a new collaborator from config
    pub fn new(config: &AdminConfig) -> AdminResult<Self> {
        config.validate()?;

        let mut builder = Client::builder().timeout(config.timeout).user_agent(format!(
            "AssetDesk/{}",
            option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
        ));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| AdminError::Configuration(format!("invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| AdminError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            resource_base: config.resource_base().to_string(),
            max_download_size: config.max_download_size,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, scope: &Scope, endpoint: Endpoint) -> RemoteResult<String> {
        let path = endpoint_path(scope.category(), endpoint).ok_or_else(|| {
            RemoteError::Transport(format!(
                "no {:?} endpoint for category {}",
                endpoint,
                scope.category()
            ))
        })?;
        Ok(format!("{}{}", self.base_url, path))
    }

    /// Adds the `module` query parameter for modular scopes.
    fn with_module(request: RequestBuilder, scope: &Scope) -> RequestBuilder {
        match scope.module() {
            Some(module) => request.query(&[("module", module.as_str())]),
            None => request,
        }
    }

    async fn send_ack(&self, request: RequestBuilder) -> RemoteResult<AckResponse> {
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(RemoteError::HttpStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl RemoteCollaborator for HttpCollaborator {
    async fn list(&self, scope: &Scope) -> RemoteResult<ListResponse> {
        let url = self.url(scope, Endpoint::List)?;
        debug!(%scope, %url, "listing resources");

        let request = Self::with_module(self.client.get(&url), scope);
        let response = request.send().await?;

        if !response.status().is_success() {
            warn!(%scope, status = response.status().as_u16(), "list failed");
            return Err(RemoteError::HttpStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    async fn upload(&self, scope: &Scope, file: &UploadFile) -> RemoteResult<AckResponse> {
        let url = self.url(scope, Endpoint::Upload)?;
        debug!(%scope, file = %file.file_name, size = file.len(), "uploading");

        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let form = Form::new().part("file", part);
        let form = match scope.module() {
            Some(module) => form.text("module", module.as_str()),
            None => form.text("class", upload_class(scope.category())),
        };

        self.send_ack(self.client.post(&url).multipart(form)).await
    }

    async fn mark_used(&self, scope: &Scope, id: &str, path: &str) -> RemoteResult<AckResponse> {
        let url = self.url(scope, Endpoint::Use)?;
        debug!(%scope, id, "marking used");

        let request = self.client.get(&url).query(&[("id", id), ("path", path)]);
        self.send_ack(Self::with_module(request, scope)).await
    }

    async fn delete(&self, scope: &Scope, id: &str, path: &str) -> RemoteResult<AckResponse> {
        let url = self.url(scope, Endpoint::Delete)?;
        debug!(%scope, id, "deleting");

        let request = self.client.get(&url).query(&[("id", id), ("path", path)]);
        self.send_ack(Self::with_module(request, scope)).await
    }

    async fn fetch(&self, path: &str) -> RemoteResult<Vec<u8>> {
        let url = self.resource_url(path);
        debug!(%url, "fetching resource");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RemoteError::HttpStatus(response.status().as_u16()));
        }

        // Check content length before downloading
        if let Some(len) = response.content_length() {
            if len > self.max_download_size {
                return Err(RemoteError::TooLarge {
                    size: len,
                    max: self.max_download_size,
                });
            }
        }

        let data = response.bytes().await?.to_vec();

        // Content-Length may be missing on chunked responses
        if data.len() as u64 > self.max_download_size {
            return Err(RemoteError::TooLarge {
                size: data.len() as u64,
                max: self.max_download_size,
            });
        }

        Ok(data)
    }

    fn resource_url(&self, path: &str) -> String {
        join_resource_url(&self.resource_base, path)
    }
}
