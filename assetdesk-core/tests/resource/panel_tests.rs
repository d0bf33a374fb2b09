// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for AssetPanel
//!
//! End-to-end flows through the facade a presentation layer uses.

use std::sync::Arc;

use tempfile::TempDir;

use assetdesk_core::remote::Operation;
use assetdesk_core::{
    AdminEvent, AssetPanel, Category, DirectorySink, MockCollaborator, Module, NotificationLevel,
    RemoteError, ResourceRecord, ResourceStatus, Scope, UploadFile,
};

use super::fixtures::{panel, record, EventLog};

#[tokio::test]
async fn test_upload_use_delete_flow() {
    let scope = Scope::content(Module::Products);
    let (remote, panel) = panel(scope);
    let log = EventLog::attach_panel(&panel);

    panel
        .upload(UploadFile::new("datasheet.pdf", b"%PDF".to_vec()))
        .await
        .unwrap();
    let uploaded = panel.records().pop().unwrap();
    assert_eq!(uploaded.status, ResourceStatus::Unused);

    assert!(panel.mark_used(&uploaded).await.unwrap());
    let used = panel.find(&uploaded.id).unwrap();
    assert!(used.is_used());
    assert!(!panel.mark_used(&used).await.unwrap());

    panel.request_delete(&used).unwrap();
    panel.confirm_delete().await.unwrap();
    assert!(panel.records().is_empty());

    assert_eq!(remote.call_count(Operation::Upload), 1);
    assert_eq!(remote.call_count(Operation::Use), 1);
    assert_eq!(remote.call_count(Operation::Delete), 1);
    assert_eq!(remote.call_count(Operation::List), 3);
    assert_eq!(log.notifications(NotificationLevel::Success).len(), 3);
    assert!(log.notifications(NotificationLevel::Error).is_empty());
}

#[tokio::test]
async fn test_records_changed_carries_snapshot() {
    let scope = Scope::image();
    let (remote, panel) = panel(scope);
    remote.set_records(scope, vec![record("a"), record("b")]);
    let log = EventLog::attach_panel(&panel);

    panel.refresh().await.unwrap();

    let snapshots: Vec<_> = log
        .all()
        .into_iter()
        .filter_map(|e| match e {
            AdminEvent::RecordsChanged { records, generation, .. } => Some((records, generation)),
            _ => None,
        })
        .collect();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].0, panel.records());
    assert_eq!(snapshots[0].1, 1);
}

#[tokio::test]
async fn test_resource_url_joins_base_and_path() {
    let (_remote, panel) = panel(Scope::image());

    assert_eq!(
        panel.resource_url(&record("logo.png")),
        "http://mock.local/uploads/logo.png"
    );
}

#[tokio::test]
async fn test_preview_text_reads_markdown() {
    let (remote, panel) = panel(Scope::markdown());
    let readme = ResourceRecord {
        path: "uploads/markdown/42-readme.md".into(),
        ..record("42-readme.md")
    };
    remote.set_resource(readme.path.clone(), "# Title\n\nbody".as_bytes().to_vec());

    assert_eq!(panel.preview_text(&readme).await.unwrap(), "# Title\n\nbody");
}

#[tokio::test]
async fn test_preview_failure_notifies() {
    let (remote, panel) = panel(Scope::markdown());
    let log = EventLog::attach_panel(&panel);
    remote.inject_error(Operation::Fetch, RemoteError::Timeout);

    assert!(panel.preview_text(&record("x.md")).await.is_err());
    assert_eq!(log.notifications(NotificationLevel::Error).len(), 1);
}

#[tokio::test]
async fn test_download_into_directory() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path()).unwrap();
    let (remote, panel) = panel(Scope::image());
    let logo = record("1700000000001-logo.png");
    remote.set_resource(logo.path.clone(), vec![1u8, 2, 3]);

    let saved = panel.download(&logo, &sink).await.unwrap();

    assert_eq!(saved, temp.path().join("logo.png"));
    assert_eq!(std::fs::read(saved).unwrap(), vec![1u8, 2, 3]);
}

#[tokio::test]
async fn test_panel_quota_override() {
    let scope = Scope::content(Module::Home);
    let remote = Arc::new(MockCollaborator::new());
    remote.set_records(scope, vec![record("only")]);
    let panel = AssetPanel::with_quota(remote.clone(), scope, 1);
    panel.refresh().await.unwrap();

    assert!(panel
        .upload(UploadFile::new("second.pdf", b"x".to_vec()))
        .await
        .is_err());
    assert_eq!(remote.call_count(Operation::Upload), 0);
    assert_eq!(panel.category(), Category::Content);
    assert_eq!(panel.quota(), 1);
}
