// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display Helpers
//!
//! Terminal output formatting and styling.

use std::sync::Arc;

use assetdesk_core::path_codec::display_name;
use assetdesk_core::{
    AdminEvent, CallbackHandler, EventHandler, NotificationLevel, ResourceRecord, ResourceStatus,
    Scope,
};
use console::style;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Handler printing panel notifications as they arrive.
pub fn notification_printer() -> Arc<dyn EventHandler> {
    Arc::new(CallbackHandler::new(|event| {
        if let AdminEvent::Notification { level, message } = event {
            match level {
                NotificationLevel::Success => success(&message),
                NotificationLevel::Error => error(&message),
            }
        }
    }))
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Uploaded")]
    uploaded: String,
}

impl RecordRow {
    fn new(record: &ResourceRecord, show_status: bool) -> Self {
        let status = match (show_status, record.status) {
            (false, _) => "-".to_string(),
            (true, ResourceStatus::Used) => "in use".to_string(),
            (true, ResourceStatus::Unused) => "unused".to_string(),
        };
        RecordRow {
            id: record.id.clone(),
            name: display_name(&record.name),
            status,
            uploaded: record
                .upload_time
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Displays the records of a scope as a table.
///
/// `quota` is shown for categories that have one.
pub fn display_records(scope: &Scope, records: &[ResourceRecord], quota: usize) {
    println!();
    if scope.category().has_quota() {
        println!(
            "{} ({} of {}):",
            style(scope).bold(),
            records.len(),
            quota
        );
    } else {
        println!("{} ({}):", style(scope).bold(), records.len());
    }
    println!();

    if records.is_empty() {
        println!("  {}", style("(no resources)").dim());
        println!();
        return;
    }

    let show_status = scope.category().supports_use();
    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow::new(r, show_status))
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!();
}

/// Displays a text resource between rules.
pub fn display_preview(name: &str, text: &str) {
    let width = 60;
    println!("{}", "─".repeat(width));
    println!("  {}", style(name).bold().cyan());
    println!("{}", "─".repeat(width));
    println!("{}", text.trim_end());
    println!("{}", "─".repeat(width));
}
