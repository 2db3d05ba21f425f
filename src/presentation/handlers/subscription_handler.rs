// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::use_cases::subscription_use_case::{
        SubscriptionUseCase, SubscriptionUseCaseError,
    },
    domain::repositories::subscription_repository::SubscriptionRepository,
    infrastructure::identity::AuthUser,
};

/// 获取当前用户的订阅
///
/// 首次访问自动开通试用；过期的订阅在此处降级为免费。
pub async fn get_subscription<SR>(
    Extension(subscription_repo): Extension<Arc<SR>>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse
where
    SR: SubscriptionRepository + 'static,
{
    let use_case = SubscriptionUseCase::new(subscription_repo);
    match use_case.current(&user.user_id).await {
        Ok(subscription) => (StatusCode::OK, Json(subscription)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<SubscriptionUseCaseError> for (StatusCode, String) {
    fn from(err: SubscriptionUseCaseError) -> Self {
        match err {
            SubscriptionUseCaseError::Repository(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
