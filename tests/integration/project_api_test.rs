// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    bearer, create_project, create_test_app, notification_rows, queue_rows, result_rows,
    worker_finishes_page, worker_records_notification,
};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_project_returns_created() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/projects")
        .add_header("authorization", bearer("alice"))
        .json(&json!({ "url": "https://example.com" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["owner_id"], "alice");
    assert_eq!(body["url"], "https://example.com");
}

#[tokio::test]
async fn test_create_project_rejects_invalid_url() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/projects")
        .add_header("authorization", bearer("alice"))
        .json(&json!({ "url": "not a url" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_projects_is_scoped_to_owner() {
    let app = create_test_app().await;
    create_project(&app, "alice", "https://one.example.com").await;
    create_project(&app, "alice", "https://two.example.com").await;
    create_project(&app, "bob", "https://other.example.com").await;

    let response = app
        .server
        .get("/v1/projects")
        .add_header("authorization", bearer("alice"))
        .await;
    response.assert_status(StatusCode::OK);

    let projects: Vec<Value> = response.json();
    assert_eq!(projects.len(), 2);
    assert!(projects.iter().all(|p| p["owner_id"] == "alice"));
}

#[tokio::test]
async fn test_get_update_delete_flow() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "alice", "https://example.com").await;

    let fetched = app
        .server
        .get(&format!("/v1/projects/{}", project_id))
        .add_header("authorization", bearer("alice"))
        .await;
    fetched.assert_status(StatusCode::OK);

    let updated = app
        .server
        .put(&format!("/v1/projects/{}", project_id))
        .add_header("authorization", bearer("alice"))
        .json(&json!({ "url": "https://renamed.example.com" }))
        .await;
    updated.assert_status(StatusCode::OK);
    let body: Value = updated.json();
    assert_eq!(body["url"], "https://renamed.example.com");

    let deleted = app
        .server
        .delete(&format!("/v1/projects/{}", project_id))
        .add_header("authorization", bearer("alice"))
        .await;
    deleted.assert_status(StatusCode::NO_CONTENT);

    let gone = app
        .server
        .get(&format!("/v1/projects/{}", project_id))
        .add_header("authorization", bearer("alice"))
        .await;
    gone.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_foreign_project_reads_as_missing() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "alice", "https://example.com").await;

    let fetched = app
        .server
        .get(&format!("/v1/projects/{}", project_id))
        .add_header("authorization", bearer("bob"))
        .await;
    fetched.assert_status(StatusCode::NOT_FOUND);

    let updated = app
        .server
        .put(&format!("/v1/projects/{}", project_id))
        .add_header("authorization", bearer("bob"))
        .json(&json!({ "url": "https://hijacked.example.com" }))
        .await;
    updated.assert_status(StatusCode::NOT_FOUND);

    let deleted = app
        .server
        .delete(&format!("/v1/projects/{}", project_id))
        .add_header("authorization", bearer("bob"))
        .await;
    deleted.assert_status(StatusCode::NOT_FOUND);

    // Still intact for its owner.
    let still_there = app
        .server
        .get(&format!("/v1/projects/{}", project_id))
        .add_header("authorization", bearer("alice"))
        .await;
    still_there.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_delete_project_removes_all_crawl_data() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "alice", "https://example.com").await;

    app.server
        .post(&format!("/v1/projects/{}/crawl", project_id))
        .add_header("authorization", bearer("alice"))
        .await
        .assert_status(StatusCode::ACCEPTED);
    worker_finishes_page(&app.db, project_id, "https://example.com/", Some(60.0), Some(250.0))
        .await;
    worker_records_notification(
        &app.db,
        project_id,
        "https://example.com/",
        "accessibility",
        "Image is missing alt text",
    )
    .await;

    app.server
        .delete(&format!("/v1/projects/{}", project_id))
        .add_header("authorization", bearer("alice"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(queue_rows(&app.db, project_id).await, 0);
    assert_eq!(result_rows(&app.db, project_id).await, 0);
    assert_eq!(notification_rows(&app.db, project_id).await, 0);
}

#[tokio::test]
async fn test_requests_without_token_are_unauthorized() {
    let app = create_test_app().await;

    let no_header = app.server.get("/v1/projects").await;
    no_header.assert_status(StatusCode::UNAUTHORIZED);

    let wrong_scheme = app
        .server
        .get("/v1/projects")
        .add_header("authorization", "Basic YWxpY2U6cHc=".to_string())
        .await;
    wrong_scheme.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_endpoints_skip_authentication() {
    let app = create_test_app().await;

    let health = app.server.get("/health").await;
    health.assert_status(StatusCode::OK);
    assert_eq!(health.text(), "OK");

    let version = app.server.get("/v1/version").await;
    version.assert_status(StatusCode::OK);
}
