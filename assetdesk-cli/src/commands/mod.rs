// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Commands

pub mod modules;
pub mod resources;

use std::time::Duration;

use anyhow::{Context, Result};
use assetdesk_core::{AssetPanel, ResourceRecord, Scope};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::CliConfig;
use crate::display;

/// Starts a spinner on stderr; hidden when stderr is not a terminal.
pub(crate) fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Connects to the store and lists `scope`.
///
/// Panel notifications are printed as they arrive.
pub(crate) async fn load_panel(config: &CliConfig, scope: Scope) -> Result<AssetPanel> {
    let panel = AssetPanel::connect(&config.admin_config()?, scope.category())?;
    panel.subscribe(display::notification_printer());

    let pb = spinner(&format!("Loading {}", scope));
    let loaded = match scope.module() {
        Some(module) => panel.select_module(module).await,
        None => panel.refresh().await,
    };
    pb.finish_and_clear();
    loaded?;

    Ok(panel)
}

/// Looks up a listed record by id.
pub(crate) fn find_record(panel: &AssetPanel, id: &str) -> Result<ResourceRecord> {
    panel
        .find(id)
        .with_context(|| format!("No resource with id '{}' in {}", id, panel.scope()))
}
