// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::use_cases::crawl_use_case::CrawlUseCase,
    domain::repositories::{
        crawl_repository::CrawlRepository, crawl_result_repository::CrawlResultRepository,
        notification_repository::NotificationRepository, project_repository::ProjectRepository,
    },
    infrastructure::identity::AuthUser,
};

/// 获取项目的爬取通知，按时间倒序
pub async fn get_notifications<PR, CR, RR, NR>(
    Extension(project_repo): Extension<Arc<PR>>,
    Extension(crawl_repo): Extension<Arc<CR>>,
    Extension(result_repo): Extension<Arc<RR>>,
    Extension(notification_repo): Extension<Arc<NR>>,
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<i32>,
) -> impl IntoResponse
where
    PR: ProjectRepository + 'static,
    CR: CrawlRepository + 'static,
    RR: CrawlResultRepository + 'static,
    NR: NotificationRepository + 'static,
{
    let use_case = CrawlUseCase::new(project_repo, crawl_repo, result_repo, notification_repo);
    match use_case.notifications(&user.user_id, project_id).await {
        Ok(notifications) => (StatusCode::OK, Json(notifications)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}
