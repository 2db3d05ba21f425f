// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    bearer, create_test_app, post_signed_webhook, seed_subscription, WEBHOOK_SECRET,
};
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::Value;
use sitepulse::infrastructure::billing;

fn checkout_event(user_id: &str, customer_id: &str) -> String {
    serde_json::json!({
        "id": "evt_checkout",
        "type": "checkout.session.completed",
        "data": {
            "object": {
                "client_reference_id": user_id,
                "customer": customer_id
            }
        }
    })
    .to_string()
}

fn subscription_deleted_event(customer_id: &str) -> String {
    serde_json::json!({
        "id": "evt_deleted",
        "type": "customer.subscription.deleted",
        "data": {
            "object": {
                "customer": customer_id
            }
        }
    })
    .to_string()
}

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
async fn test_checkout_completed_upgrades_to_premium() {
    let app = create_test_app().await;

    let response = post_signed_webhook(&app, &checkout_event("alice", "cus_1")).await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["received"], true);

    let subscription = fetch_subscription(&app, "alice").await;
    assert_eq!(subscription["status"], "premium");
    assert_eq!(subscription["customer_id"], "cus_1");
}

#[tokio::test]
async fn test_subscription_deleted_downgrades_to_free() {
    let app = create_test_app().await;

    post_signed_webhook(&app, &checkout_event("alice", "cus_1"))
        .await
        .assert_status(StatusCode::OK);
    post_signed_webhook(&app, &subscription_deleted_event("cus_1"))
        .await
        .assert_status(StatusCode::OK);

    let subscription = fetch_subscription(&app, "alice").await;
    assert_eq!(subscription["status"], "free");
}

#[tokio::test]
async fn test_cancel_at_period_end_keeps_premium_until_period_end() {
    let app = create_test_app().await;
    post_signed_webhook(&app, &checkout_event("alice", "cus_1"))
        .await
        .assert_status(StatusCode::OK);

    let period_end = (Utc::now() + Duration::days(14)).timestamp();
    let payload = serde_json::json!({
        "id": "evt_updated",
        "type": "customer.subscription.updated",
        "data": {
            "object": {
                "customer": "cus_1",
                "status": "active",
                "cancel_at_period_end": true,
                "current_period_end": period_end
            }
        }
    })
    .to_string();
    post_signed_webhook(&app, &payload)
        .await
        .assert_status(StatusCode::OK);

    let subscription = fetch_subscription(&app, "alice").await;
    assert_eq!(subscription["status"], "premium");
}

#[tokio::test]
async fn test_bad_signature_is_rejected_without_state_change() {
    let app = create_test_app().await;
    let payload = checkout_event("alice", "cus_1");

    let ts = Utc::now().timestamp();
    let response = app
        .server
        .post("/v1/billing/webhook")
        .add_header(
            "Billing-Signature",
            format!("t={},v1={}", ts, "deadbeef".repeat(8)),
        )
        .text(payload)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // The event must not have been applied: the first authenticated read
    // provisions a plain trial instead of the premium the event carried.
    let subscription = fetch_subscription(&app, "alice").await;
    assert_eq!(subscription["status"], "trial");
}

#[tokio::test]
async fn test_stale_timestamp_is_rejected() {
    let app = create_test_app().await;
    let payload = checkout_event("alice", "cus_1");

    let stale = Utc::now().timestamp() - 3600;
    let header = format!(
        "t={},v1={}",
        stale,
        billing::sign(WEBHOOK_SECRET, stale, &payload)
    );
    let response = app
        .server
        .post("/v1/billing/webhook")
        .add_header("Billing-Signature", header)
        .text(payload)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_signature_header_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/billing/webhook")
        .text(checkout_event("alice", "cus_1"))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unrelated_event_type_is_acknowledged() {
    let app = create_test_app().await;
    let payload = serde_json::json!({
        "id": "evt_invoice",
        "type": "invoice.paid",
        "data": { "object": {} }
    })
    .to_string();

    let response = post_signed_webhook(&app, &payload).await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_update_for_unknown_customer_is_acknowledged() {
    let app = create_test_app().await;
    seed_subscription(
        &app.db,
        "alice",
        "premium",
        Utc::now() + Duration::days(30),
        Some("cus_1"),
    )
    .await;

    let payload = serde_json::json!({
        "id": "evt_unknown",
        "type": "customer.subscription.updated",
        "data": {
            "object": {
                "customer": "cus_does_not_exist",
                "status": "past_due",
                "cancel_at_period_end": false
            }
        }
    })
    .to_string();

    post_signed_webhook(&app, &payload)
        .await
        .assert_status(StatusCode::OK);

    // Nothing changed for the customer we do know.
    let subscription = fetch_subscription(&app, "alice").await;
    assert_eq!(subscription["status"], "premium");
}
