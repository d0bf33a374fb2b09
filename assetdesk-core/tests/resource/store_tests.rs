// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for ResourceStore
//!
//! Scenarios:
//! - A refresh replaces the records wholesale with the listed data
//! - A failed refresh keeps the previous records
//! - Overlapping refreshes: the last response to land wins
//! - The loading flag is raised exactly while a refresh is in flight

use std::time::Duration;

use assetdesk_core::remote::Operation;
use assetdesk_core::{
    AdminError, ErrorKind, ListResponse, Module, NotificationLevel, RemoteError, Scope,
};

use super::fixtures::{record, records, EventLog, Harness};

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
async fn test_refresh_equals_listed_data() {
    let scope = Scope::content(Module::Home);
    let harness = Harness::seeded(scope, records(3)).await;
    assert_eq!(harness.ids(), vec!["r0", "r1", "r2"]);

    harness.remote.set_records(scope, vec![record("x"), record("r1")]);
    let count = harness
        .store
        .refresh(harness.remote.as_ref(), &scope)
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(harness.store.records(), harness.remote.records(&scope));
}

#[tokio::test]
async fn test_missing_data_lists_empty() {
    let scope = Scope::image();
    let harness = Harness::seeded(scope, records(2)).await;

    harness.remote.queue_list(ListResponse::without_data());
    let count = harness
        .store
        .refresh(harness.remote.as_ref(), &scope)
        .await
        .unwrap();

    assert_eq!(count, 0);
    assert!(harness.store.is_empty());
}

#[tokio::test]
async fn test_network_failure_keeps_previous_records() {
    let scope = Scope::markdown();
    let harness = Harness::seeded(scope, records(2)).await;
    let log = EventLog::attach(&harness.events);
    let generation = harness.store.generation();

    harness
        .remote
        .inject_error(Operation::List, RemoteError::Timeout);
    let err = harness
        .store
        .refresh(harness.remote.as_ref(), &scope)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NetworkFailure);
    assert_eq!(harness.ids(), vec!["r0", "r1"]);
    assert_eq!(harness.store.generation(), generation);
    assert!(!harness.store.loading());
    assert_eq!(log.notifications(NotificationLevel::Error).len(), 1);
}

#[tokio::test]
async fn test_rejected_list_keeps_previous_records() {
    let scope = Scope::image();
    let harness = Harness::seeded(scope, records(1)).await;

    harness.remote.reject_next(Operation::List);
    let err = harness
        .store
        .refresh(harness.remote.as_ref(), &scope)
        .await
        .unwrap_err();

    assert_eq!(err, AdminError::RemoteRejected("list"));
    assert_eq!(harness.ids(), vec!["r0"]);
}

#[tokio::test]
async fn test_loading_flag_brackets_refresh() {
    let scope = Scope::image();
    let harness = Harness::new(scope);
    let log = EventLog::attach(&harness.events);
    let gate = harness.remote.hold(Operation::List);

    let task = {
        let store = harness.store.clone();
        let remote = harness.remote.clone();
        tokio::spawn(async move { store.refresh(remote.as_ref(), &scope).await })
    };

    let remote = harness.remote.clone();
    wait_until(|| remote.call_count(Operation::List) == 1).await;
    assert!(harness.store.loading());

    gate.notify_one();
    task.await.unwrap().unwrap();

    assert!(!harness.store.loading());
    assert_eq!(log.loading_transitions(), vec![true, false]);
}

#[tokio::test]
async fn test_overlapping_refreshes_last_response_wins() {
    let scope = Scope::content(Module::About);
    let harness = Harness::new(scope);
    let gate = harness.remote.hold(Operation::List);
    harness.remote.queue_list(ListResponse::with_records(vec![record("first")]));
    harness.remote.queue_list(ListResponse::with_records(vec![record("second")]));

    let spawn_refresh = || {
        let store = harness.store.clone();
        let remote = harness.remote.clone();
        tokio::spawn(async move { store.refresh(remote.as_ref(), &scope).await })
    };
    let a = spawn_refresh();
    let b = spawn_refresh();

    let remote = harness.remote.clone();
    wait_until(|| remote.call_count(Operation::List) == 2).await;

    gate.notify_one();
    let store = harness.store.clone();
    wait_until(|| store.generation() == 1).await;
    assert_eq!(harness.ids(), vec!["first"]);
    assert!(harness.store.loading());

    gate.notify_one();
    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    assert_eq!(harness.ids(), vec!["second"]);
    assert_eq!(harness.store.generation(), 2);
    assert!(!harness.store.loading());
}

#[tokio::test]
async fn test_discard_clears_old_scope() {
    let old = Scope::content(Module::Home);
    let harness = Harness::seeded(old, records(2)).await;

    let new = Scope::content(Module::Products);
    harness.store.discard(new);

    assert!(harness.store.is_empty());
    assert_eq!(harness.store.scope(), Some(new));
    assert_eq!(harness.remote.total_calls(), 0);
}

#[tokio::test]
async fn test_find_by_id() {
    let harness = Harness::seeded(Scope::image(), records(3)).await;

    assert_eq!(harness.store.find("r2").map(|r| r.path), Some("uploads/r2".into()));
    assert!(harness.store.find("missing").is_none());
}
