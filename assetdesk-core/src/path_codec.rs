// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path Codec
//!
//! Derives user-facing names from the names the remote store hands out.
//!
//! The store embeds bookkeeping into stored names instead of separate
//! fields:
//! - a leading `<token>-` (upload timestamp or disambiguator)
//! - a trailing `-active` marker on the resource currently in use
//!
//! Neither may leak into a file saved on the user's disk.

/// Marker appended by the store to the name of the in-use resource.
pub const ACTIVE_SUFFIX: &str = "-active";

/// Separator between the bookkeeping token and the original name.
const TOKEN_SEPARATOR: char = '-';

/// Derives the filename a downloaded resource is saved under.
///
/// Strips a trailing `-active` marker first, then everything up to and
/// including the first `-`. Total: input without either pattern comes
/// back unchanged.
///
/// # Example
///
/// ```
/// use assetdesk_core::path_codec::derive_download_name;
///
/// assert_eq!(derive_download_name("1699999999999-report-active"), "report");
/// assert_eq!(derive_download_name("report"), "report");
/// ```
pub fn derive_download_name(raw_name: &str) -> String {
    let unmarked = strip_active_marker(raw_name);
    match unmarked.split_once(TOKEN_SEPARATOR) {
        Some((_token, rest)) => rest.to_string(),
        None => unmarked.to_string(),
    }
}

/// Name shown in resource lists.
///
/// Only the `-active` marker is removed; the token prefix stays so that
/// two uploads of the same file remain distinguishable.
pub fn display_name(raw_name: &str) -> String {
    strip_active_marker(raw_name).to_string()
}

/// Returns true if the store marked this name as the in-use resource.
pub fn has_active_marker(raw_name: &str) -> bool {
    raw_name.ends_with(ACTIVE_SUFFIX)
}

/// Joins a resource base address and a store-relative path with exactly one `/`.
pub fn join_resource_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn strip_active_marker(raw_name: &str) -> &str {
    raw_name.strip_suffix(ACTIVE_SUFFIX).unwrap_or(raw_name)
}
