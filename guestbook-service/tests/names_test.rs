mod common;

use common::{TestApp, UnreachableStore};
use serde_json::{json, Value};
use std::sync::Arc;

#[tokio::test]
async fn add_name_trims_and_confirms() {
    let app = TestApp::spawn().await;

    let response = app.add_name("  Alice  ").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "message": "Name added", "name": "Alice" }));

    assert_eq!(app.names().await, vec!["Alice"]);
}

#[tokio::test]
async fn blank_name_is_rejected_without_storing() {
    let app = TestApp::spawn().await;
    app.add_name("Carol").await;

    for blank in ["", "   ", "\t\n ", "\u{1f}"] {
        let response = app.add_name(blank).await;

        assert_eq!(response.status().as_u16(), 400, "input {:?}", blank);
        let body: Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body, json!({ "detail": "Name cannot be empty" }));
    }

    assert_eq!(app.names().await, vec!["Carol"]);
}

#[tokio::test]
async fn duplicate_names_are_kept() {
    let app = TestApp::spawn().await;

    assert_eq!(app.add_name("Bob").await.status().as_u16(), 200);
    assert_eq!(app.add_name("Bob").await.status().as_u16(), 200);

    assert_eq!(app.names().await, vec!["Bob", "Bob"]);
}

#[tokio::test]
async fn empty_guestbook_lists_no_names() {
    let app = TestApp::spawn().await;

    let response = app.get_names().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "names": [] }));
}

#[tokio::test]
async fn each_add_appends_exactly_one_entry_in_order() {
    let app = TestApp::spawn().await;

    let inputs = ["Dave", " Eve", "Frank ", "Dave"];
    for (i, input) in inputs.iter().enumerate() {
        let before = app.names().await;
        assert_eq!(app.add_name(input).await.status().as_u16(), 200);
        let after = app.names().await;

        assert_eq!(after.len(), before.len() + 1, "after add #{}", i);
        assert_eq!(after.last().map(String::as_str), Some(input.trim()));
        assert_eq!(&after[..before.len()], &before[..]);
    }
}

#[tokio::test]
async fn listing_is_stable_without_writes() {
    let app = TestApp::spawn().await;
    app.add_name("Grace").await;
    app.add_name("Heidi").await;

    let first = app.names().await;
    let second = app.names().await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_adds_are_all_recorded() {
    let app = TestApp::spawn().await;

    let requests = (0..20).map(|i| {
        let client = app.client.clone();
        let url = format!("{}/api/names", app.address);
        async move {
            client
                .post(url)
                .json(&json!({ "name": format!("guest-{}", i) }))
                .send()
                .await
                .expect("Failed to execute request")
                .status()
                .as_u16()
        }
    });
    let statuses = futures::future::join_all(requests).await;

    assert!(statuses.iter().all(|status| *status == 200));
    let mut names = app.names().await;
    names.sort();
    let mut expected: Vec<String> = (0..20).map(|i| format!("guest-{}", i)).collect();
    expected.sort();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn malformed_body_is_unprocessable() {
    let app = TestApp::spawn().await;
    let url = format!("{}/api/names", app.address);

    let missing_field = app
        .client
        .post(&url)
        .json(&json!({ "nickname": "Ivan" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing_field.status().as_u16(), 422);
    let body: Value = missing_field.json().await.expect("Failed to parse JSON");
    assert!(body["detail"].is_string());

    let not_json = app
        .client
        .post(&url)
        .header("content-type", "application/json")
        .body("name=Ivan")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(not_json.status().as_u16(), 422);

    assert!(app.names().await.is_empty());
}

#[tokio::test]
async fn json_body_without_content_type_is_accepted() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/names", app.address))
        .body(r#"{"name": "  Ivan "}"#)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "message": "Name added", "name": "Ivan" }));
    assert_eq!(app.names().await, vec!["Ivan"]);
}

#[tokio::test]
async fn store_failure_is_an_opaque_server_error() {
    let app = TestApp::spawn_with_store(Arc::new(UnreachableStore)).await;

    let add = app.add_name("Judy").await;
    assert_eq!(add.status().as_u16(), 500);
    let body: Value = add.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "detail": "Internal server error" }));

    let list = app.get_names().await;
    assert_eq!(list.status().as_u16(), 500);
    let body = list.text().await.expect("Failed to read body");
    assert!(!body.contains("timeout"));
}

#[tokio::test]
async fn blank_name_is_rejected_before_reaching_the_store() {
    let app = TestApp::spawn_with_store(Arc::new(UnreachableStore)).await;

    let response = app.add_name("   ").await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api/names", app.address))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}
