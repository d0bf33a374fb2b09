// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for AssetPanel over HTTP
//!
//! Mutation followed by refresh, observed at the wire.

use mockito::{Matcher, Server};

use assetdesk_core::{AdminConfig, AssetPanel, Category, ErrorKind, Module, UploadFile};

const TWO_RECORDS: &str = r#"{"success":true,"data":[
    {"id":"1-a.pdf","name":"1-a.pdf","path":"uploads/content/1-a.pdf","status":"used"},
    {"id":"2-b.pdf","name":"2-b.pdf","path":"uploads/content/2-b.pdf","status":"unused"}
]}"#;

#[tokio::test]
async fn test_use_then_refresh_over_http() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/content/list")
        .match_query(Matcher::UrlEncoded("module".into(), "solutions".into()))
        .with_status(200)
        .with_body(TWO_RECORDS)
        .expect(3)
        .create_async()
        .await;
    let used = server
        .mock("GET", "/content/use")
        .match_query(Matcher::UrlEncoded("id".into(), "2-b.pdf".into()))
        .with_status(200)
        .with_body(r#"{"success":true}"#)
        .expect(1)
        .create_async()
        .await;

    let panel =
        AssetPanel::connect(&AdminConfig::with_base_url(server.url()), Category::Content).unwrap();
    panel.select_module(Module::Solutions).await.unwrap();
    assert_eq!(panel.records().len(), 2);

    let first = panel.find("1-a.pdf").unwrap();
    assert!(!panel.mark_used(&first).await.unwrap());

    let second = panel.find("2-b.pdf").unwrap();
    assert!(panel.mark_used(&second).await.unwrap());

    panel.refresh().await.unwrap();

    used.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn test_quota_blocks_upload_before_request() {
    let mut server = Server::new_async().await;
    let body = format!(
        r#"{{"success":true,"data":[{}]}}"#,
        (0..8)
            .map(|i| format!(
                r#"{{"id":"{i}-f.pdf","name":"{i}-f.pdf","path":"uploads/content/{i}-f.pdf"}}"#
            ))
            .collect::<Vec<_>>()
            .join(",")
    );
    let _list = server
        .mock("GET", "/content/list")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
    let upload = server
        .mock("POST", "/content/upload")
        .expect(0)
        .create_async()
        .await;

    let panel =
        AssetPanel::connect(&AdminConfig::with_base_url(server.url()), Category::Content).unwrap();
    panel.refresh().await.unwrap();

    let err = panel
        .upload(UploadFile::new("ninth.pdf", b"x".to_vec()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::LocalQuotaExceeded);
    upload.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_store_is_network_failure() {
    let config = AdminConfig::with_base_url("http://127.0.0.1:9")
        .with_timeout(std::time::Duration::from_secs(2));
    let panel = AssetPanel::connect(&config, Category::Image).unwrap();

    let err = panel.refresh().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NetworkFailure);
    assert!(panel.records().is_empty());
    assert!(!panel.loading());
}

#[tokio::test]
async fn test_connect_uses_configured_quota() {
    let mut config = AdminConfig::with_base_url("http://127.0.0.1:9");
    config.content_quota = 3;

    let panel = AssetPanel::connect(&config, Category::Content).unwrap();

    assert_eq!(panel.quota(), 3);
}
