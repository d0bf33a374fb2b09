// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resource type definitions
//!
//! These types mirror the records served by the remote store's list
//! endpoints and the scopes they are listed under.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of resident records in a content scope.
///
/// Enforced client-side only; the remote store is the final arbiter.
pub const CONTENT_QUOTA: usize = 8;

/// Categories of managed assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Uploaded images
    Image,
    /// Module-scoped documents
    Content,
    /// Markdown files
    Markdown,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 3] = [Category::Content, Category::Image, Category::Markdown];

    /// Wire name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Image => "image",
            Category::Content => "content",
            Category::Markdown => "markdown",
        }
    }

    /// Whether records of this category can be marked as in use.
    pub fn supports_use(&self) -> bool {
        matches!(self, Category::Content)
    }

    /// Whether uploads into this category are bounded by [`CONTENT_QUOTA`].
    pub fn has_quota(&self) -> bool {
        matches!(self, Category::Content)
    }

    /// Whether scopes of this category are partitioned by [`Module`].
    pub fn is_modular(&self) -> bool {
        matches!(self, Category::Content)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" | "images" | "img" => Ok(Category::Image),
            "content" => Ok(Category::Content),
            "markdown" | "md" => Ok(Category::Markdown),
            _ => Err(ParseScopeError::UnknownCategory(s.to_string())),
        }
    }
}

/// Content modules. The set is closed; it is not extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    /// Landing page content
    #[default]
    Home,
    /// Product documentation
    Products,
    /// Solution sheets
    Solutions,
    /// Company information
    About,
}

impl Module {
    /// All modules in display order.
    pub const ALL: [Module; 4] = [
        Module::Home,
        Module::Products,
        Module::Solutions,
        Module::About,
    ];

    /// Wire name of this module.
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Home => "home",
            Module::Products => "products",
            Module::Solutions => "solutions",
            Module::About => "about",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Module {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Module::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseScopeError::UnknownModule(s.to_string()))
    }
}

/// Error parsing a category or module name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseScopeError {
    /// Not one of image, content, markdown
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Not one of the fixed content modules
    #[error("unknown module: {0}")]
    UnknownModule(String),
}

/// The (category, module) pair a list or mutation runs against.
///
/// Only content scopes carry a module; images and markdown have a single
/// implicit module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scope {
    category: Category,
    module: Option<Module>,
}

impl Scope {
    /// The image scope.
    pub fn image() -> Self {
        Scope {
            category: Category::Image,
            module: None,
        }
    }

    /// The markdown scope.
    pub fn markdown() -> Self {
        Scope {
            category: Category::Markdown,
            module: None,
        }
    }

    /// A content scope for the given module.
    pub fn content(module: Module) -> Self {
        Scope {
            category: Category::Content,
            module: Some(module),
        }
    }

    /// Default scope of a category (first module for content).
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Image => Scope::image(),
            Category::Markdown => Scope::markdown(),
            Category::Content => Scope::content(Module::default()),
        }
    }

    /// The category of this scope.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The module of this scope, if the category is modular.
    pub fn module(&self) -> Option<Module> {
        self.module
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.module {
            Some(module) => write!(f, "{}/{}", self.category, module),
            None => write!(f, "{}", self.category),
        }
    }
}

/// Use status of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    /// Stored but not in use
    #[default]
    Unused,
    /// The scope's in-use resource
    Used,
}

/// Upload timestamp as sent by the store (collaborator clock).
///
/// Display-only; never used for conflict detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UploadTime {
    /// Milliseconds since the Unix epoch
    Millis(i64),
    /// Non-integral or out-of-range number, kept as sent
    Number(serde_json::Number),
    /// Preformatted or ISO 8601 text
    Text(String),
}

impl fmt::Display for UploadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadTime::Millis(ms) => write!(f, "{}", ms),
            UploadTime::Number(n) => write!(f, "{}", n),
            UploadTime::Text(text) => write!(f, "{}", text),
        }
    }
}

/// A resource as listed by the remote store.
///
/// Never built or mutated locally; always a verbatim snapshot of the last
/// successful list for its scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Store-assigned identifier, unique within a scope
    #[serde(with = "opaque_id")]
    pub id: String,
    /// Stored name, possibly with token prefix and `-active` marker
    #[serde(default)]
    pub name: String,
    /// Store-relative locator, also the suffix of the fetchable URL
    pub path: String,
    /// Use status (absent for images and markdown)
    #[serde(default)]
    pub status: ResourceStatus,
    /// Upload timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_time: Option<UploadTime>,
}

impl ResourceRecord {
    /// Returns true if this record is the scope's in-use resource.
    pub fn is_used(&self) -> bool {
        self.status == ResourceStatus::Used
    }

    /// The raw name a download filename is derived from.
    ///
    /// Stored files are identified by `id`; falls back to `name` when the
    /// store sends an empty id.
    pub fn download_source(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }
}

/// Serde helper for identifiers the store may send as string or number.
mod opaque_id {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    pub fn serialize<S>(id: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(id)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        })
    }
}
