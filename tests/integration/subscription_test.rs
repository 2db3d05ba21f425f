// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{bearer, create_test_app, seed_subscription};
use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

async fn fetch_subscription(app: &super::helpers::TestApp, token: &str) -> Value {
    let response = app
        .server
        .get("/v1/subscription")
        .add_header("authorization", bearer(token))
        .await;
    response.assert_status(StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_first_read_provisions_a_week_of_trial() {
    let app = create_test_app().await;

    let subscription = fetch_subscription(&app, "alice").await;
    assert_eq!(subscription["status"], "trial");

    let valid_until = DateTime::parse_from_rfc3339(subscription["valid_until"].as_str().unwrap())
        .expect("valid_until should be RFC 3339");
    assert!(valid_until > Utc::now() + Duration::days(6));
    assert!(valid_until < Utc::now() + Duration::days(8));
}

#[tokio::test]
async fn test_repeated_reads_keep_the_same_trial() {
    let app = create_test_app().await;

    let first = fetch_subscription(&app, "alice").await;
    let second = fetch_subscription(&app, "alice").await;
    assert_eq!(first["valid_until"], second["valid_until"]);
}

#[tokio::test]
async fn test_expired_trial_downgrades_on_read() {
    let app = create_test_app().await;
    seed_subscription(&app.db, "alice", "trial", Utc::now() - Duration::days(1), None).await;

    let subscription = fetch_subscription(&app, "alice").await;
    assert_eq!(subscription["status"], "free");

    // The downgrade is persisted, not recomputed per read.
    let again = fetch_subscription(&app, "alice").await;
    assert_eq!(again["status"], "free");
}

#[tokio::test]
async fn test_expired_premium_downgrades_on_read() {
    let app = create_test_app().await;
    seed_subscription(
        &app.db,
        "alice",
        "premium",
        Utc::now() - Duration::hours(2),
        Some("cus_1"),
    )
    .await;

    let subscription = fetch_subscription(&app, "alice").await;
    assert_eq!(subscription["status"], "free");
    // The customer link survives the downgrade.
    assert_eq!(subscription["customer_id"], "cus_1");
}

#[tokio::test]
async fn test_subscriptions_are_per_user() {
    let app = create_test_app().await;

    let alice = fetch_subscription(&app, "alice").await;
    let bob = fetch_subscription(&app, "bob").await;

    assert_eq!(alice["user_id"], "alice");
    assert_eq!(bob["user_id"], "bob");
}
