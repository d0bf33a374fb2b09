// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for module switching
//!
//! Scenarios:
//! - Switching module issues exactly one refresh, scoped to the new module
//! - A delete awaiting confirmation in the old module is discarded
//! - Records of the old module are never shown under the new one,
//!   including from a list of the old module that lands late

use std::time::Duration;

use assetdesk_core::remote::{Operation, RemoteCall};
use assetdesk_core::{
    AdminError, AdminEvent, DeleteState, Module, NotificationLevel, RemoteError, Scope,
    UploadFile,
};

use super::fixtures::{panel, record, records, EventLog};

async fn wait_until(mut condition: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !condition() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("condition not reached in time");
}

#[tokio::test]
async fn test_switch_issues_one_scoped_refresh() {
    let (remote, panel) = panel(Scope::content(Module::Home));
    remote.set_records(Scope::content(Module::Products), records(2));

    let count = panel.select_module(Module::Products).await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        remote.calls(),
        vec![RemoteCall::List {
            scope: Scope::content(Module::Products)
        }]
    );
    assert_eq!(panel.active_module(), Some(Module::Products));
    assert_eq!(panel.scope(), Scope::content(Module::Products));
}

#[tokio::test]
async fn test_switch_discards_pending_delete() {
    let home = Scope::content(Module::Home);
    let (remote, panel) = panel(home);
    remote.set_records(home, vec![record("a")]);
    panel.refresh().await.unwrap();

    panel.request_delete(&record("a")).unwrap();
    panel.select_module(Module::Solutions).await.unwrap();

    assert!(panel.pending_delete().is_none());
    assert_eq!(panel.delete_state(), DeleteState::Idle);
    assert_eq!(
        panel.confirm_delete().await,
        Err(AdminError::NoPendingDelete)
    );
    assert_eq!(remote.call_count(Operation::Delete), 0);
}

#[tokio::test]
async fn test_old_module_records_never_shown_under_new() {
    let home = Scope::content(Module::Home);
    let (remote, panel) = panel(home);
    remote.set_records(home, records(3));
    panel.refresh().await.unwrap();
    let log = EventLog::attach_panel(&panel);

    remote.inject_error(Operation::List, RemoteError::Timeout);
    let err = panel.select_module(Module::About).await.unwrap_err();

    assert_eq!(err, AdminError::NetworkFailure(RemoteError::Timeout));
    assert!(panel.records().is_empty());
    for event in log.all() {
        if let AdminEvent::RecordsChanged { scope, records, .. } = event {
            assert_eq!(scope, Scope::content(Module::About));
            assert!(records.is_empty());
        }
    }
    assert_eq!(log.notifications(NotificationLevel::Error).len(), 1);
}

#[tokio::test]
async fn test_late_list_of_old_module_is_dropped() {
    let home = Scope::content(Module::Home);
    let about = Scope::content(Module::About);
    let (remote, panel) = panel(home);
    remote.set_records(home, records(8));
    remote.set_records(about, vec![record("a0")]);
    let gate = remote.hold(Operation::List);

    let (late, switched) = tokio::join!(panel.refresh(), async {
        wait_until(|| remote.call_count(Operation::List) == 1).await;
        remote.release_hold(Operation::List);
        let switched = panel.select_module(Module::About).await;
        gate.notify_one();
        switched
    });

    assert_eq!(late.unwrap(), 8);
    assert_eq!(switched.unwrap(), 1);
    assert_eq!(panel.scope(), about);
    assert_eq!(panel.records(), vec![record("a0")]);

    // Quota is checked against the About records, not Home's eight.
    panel
        .upload(UploadFile::new("next.pdf", b"x".to_vec()))
        .await
        .unwrap();
    assert_eq!(remote.records(&about).len(), 2);
}

#[tokio::test]
async fn test_switch_announces_module() {
    let (_remote, panel) = panel(Scope::content(Module::Home));
    let log = EventLog::attach_panel(&panel);

    panel.select_module(Module::About).await.unwrap();

    assert!(log
        .all()
        .iter()
        .any(|e| matches!(e, AdminEvent::ModuleChanged { module: Module::About })));
}

#[tokio::test]
async fn test_reselecting_active_module_refreshes() {
    let (remote, panel) = panel(Scope::content(Module::Home));

    panel.select_module(Module::Home).await.unwrap();

    assert_eq!(remote.call_count(Operation::List), 1);
}

#[tokio::test]
async fn test_image_panel_rejects_module_switch() {
    let (remote, panel) = panel(Scope::image());

    let err = panel.select_module(Module::Products).await.unwrap_err();

    assert!(matches!(err, AdminError::Unsupported(_)));
    assert_eq!(panel.scope(), Scope::image());
    assert_eq!(remote.total_calls(), 0);
}

#[tokio::test]
async fn test_modules_fixed_order() {
    let (_remote, panel) = panel(Scope::content(Module::Home));

    assert_eq!(
        panel.modules(),
        &[
            Module::Home,
            Module::Products,
            Module::Solutions,
            Module::About
        ]
    );
}
