// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Modules Command
//!
//! Shows the content modules, optionally with what each one holds.

use anyhow::Result;
use assetdesk_core::path_codec::display_name;
use assetdesk_core::{AssetPanel, Category, Module};
use console::style;

use crate::config::CliConfig;
use crate::display;

/// Lists the content modules.
///
/// With `counts`, visits every module in turn and reports its record
/// count and in-use resource.
pub async fn list(config: &CliConfig, counts: bool) -> Result<()> {
    if !counts {
        for module in Module::ALL {
            println!("  {}", module);
        }
        return Ok(());
    }

    let panel = AssetPanel::connect(&config.admin_config()?, Category::Content)?;
    panel.subscribe(display::notification_printer());

    println!();
    for module in panel.modules() {
        let count = match panel.select_module(*module).await {
            Ok(count) => count,
            Err(_) => {
                println!("  {:10} {}", module.as_str(), style("unavailable").red());
                continue;
            }
        };
        let in_use = panel
            .records()
            .into_iter()
            .find(|r| r.is_used())
            .map(|r| display_name(&r.name))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {} {}/{}  in use: {}",
            style(format!("{:10}", module.as_str())).bold(),
            count,
            panel.quota(),
            in_use
        );
    }
    println!();

    Ok(())
}
