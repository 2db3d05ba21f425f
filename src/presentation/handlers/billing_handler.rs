// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use metrics::counter;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::{
    domain::{
        repositories::subscription_repository::SubscriptionRepository,
        services::billing_service::{BillingEvent, BillingService, BillingServiceError},
    },
    infrastructure::billing::{BillingWebhookVerifier, SIGNATURE_HEADER},
};

/// 接收账单提供商的Webhook事件
///
/// 签名针对原始请求体计算，验证通过之前不解析任何内容。
/// 已知事件落库后返回200；签名或负载不合法返回400。
pub async fn handle_webhook<SR>(
    Extension(verifier): Extension<Arc<BillingWebhookVerifier>>,
    Extension(service): Extension<Arc<BillingService<SR>>>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse
where
    SR: SubscriptionRepository + 'static,
{
    let Some(signature) = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing signature header" })),
        )
            .into_response();
    };

    if let Err(e) = verifier.verify(signature, &body, Utc::now().timestamp()) {
        warn!("billing webhook rejected: {}", e);
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
            .into_response();
    }

    let event = match BillingEvent::parse(&body) {
        Ok(event) => event,
        Err(e) => {
            warn!("billing webhook unparseable: {}", e);
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
                .into_response();
        }
    };

    match service.handle_event(event, Utc::now()).await {
        Ok(_) => {
            counter!("billing_events_total").increment(1);
            (StatusCode::OK, Json(json!({ "received": true }))).into_response()
        }
        Err(BillingServiceError::MalformedEvent(msg)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
        }
        Err(BillingServiceError::Repository(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
