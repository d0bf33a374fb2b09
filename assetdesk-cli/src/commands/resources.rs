// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resources Command
//!
//! List, upload, use, delete and download resources of one scope.

use std::path::Path;

use anyhow::{Context, Result};
use assetdesk_core::path_codec::display_name;
use assetdesk_core::{DirectorySink, Module, Scope, UploadFile};
use dialoguer::Confirm;

use super::{find_record, load_panel, spinner};
use crate::config::CliConfig;
use crate::display;

/// Lists the resources of a scope.
pub async fn list(config: &CliConfig, scope: Scope, json: bool) -> Result<()> {
    let panel = load_panel(config, scope).await?;
    let records = panel.records();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    display::display_records(&scope, &records, panel.quota());
    Ok(())
}

/// Uploads a file into a scope.
pub async fn upload(config: &CliConfig, scope: Scope, file: &Path) -> Result<()> {
    let upload = UploadFile::from_path(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let panel = load_panel(config, scope).await?;

    let pb = spinner(&format!("Uploading {}", upload.file_name));
    let uploaded = panel.upload(upload).await;
    pb.finish_and_clear();
    uploaded?;

    display::display_records(&scope, &panel.records(), panel.quota());
    Ok(())
}

/// Marks a content resource as the module's in-use resource.
pub async fn mark_used(config: &CliConfig, module: Module, id: &str) -> Result<()> {
    let panel = load_panel(config, Scope::content(module)).await?;
    let record = find_record(&panel, id)?;

    if !panel.mark_used(&record).await? {
        display::info(&format!(
            "'{}' is already in use",
            display_name(&record.name)
        ));
    }
    Ok(())
}

/// Deletes a resource after confirmation.
pub async fn delete(config: &CliConfig, scope: Scope, id: &str, yes: bool) -> Result<()> {
    let panel = load_panel(config, scope).await?;
    let record = find_record(&panel, id)?;

    panel.request_delete(&record)?;

    let confirmed = yes
        || Confirm::new()
            .with_prompt(format!(
                "Delete '{}' from {}?",
                display_name(&record.name),
                scope
            ))
            .default(false)
            .interact()?;

    if !confirmed {
        panel.cancel_delete();
        display::info("Deletion cancelled.");
        return Ok(());
    }

    panel.confirm_delete().await?;
    Ok(())
}

/// Downloads a resource into a directory.
pub async fn download(config: &CliConfig, scope: Scope, id: &str, out: &Path) -> Result<()> {
    let panel = load_panel(config, scope).await?;
    let record = find_record(&panel, id)?;
    let sink = DirectorySink::new(out)?;

    panel.download(&record, &sink).await?;
    Ok(())
}

/// Prints the fetchable URL of a resource, optionally opening it.
pub async fn url(config: &CliConfig, scope: Scope, id: &str, open_it: bool) -> Result<()> {
    let panel = load_panel(config, scope).await?;
    let record = find_record(&panel, id)?;
    let url = panel.resource_url(&record);

    println!("{}", url);

    if open_it {
        open::that(&url).with_context(|| format!("Failed to open {}", url))?;
    }
    Ok(())
}

/// Prints a markdown resource.
pub async fn preview(config: &CliConfig, id: &str) -> Result<()> {
    let panel = load_panel(config, Scope::markdown()).await?;
    let record = find_record(&panel, id)?;

    let text = panel.preview_text(&record).await?;
    display::display_preview(&display_name(&record.name), &text);
    Ok(())
}
