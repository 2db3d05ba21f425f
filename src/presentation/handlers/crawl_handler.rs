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
    application::use_cases::crawl_use_case::{CrawlUseCase, CrawlUseCaseError},
    domain::repositories::{
        crawl_repository::CrawlRepository,
        crawl_result_repository::CrawlResultRepository,
        notification_repository::NotificationRepository,
        project_repository::{ProjectRepository, RepositoryError},
    },
    infrastructure::identity::AuthUser,
};

/// 触发一次新的爬取
///
/// 上一代的结果与通知随入队一并清除，项目状态回到queued。
pub async fn start_crawl<PR, CR, RR, NR>(
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
    match use_case.start_crawl(&user.user_id, project_id).await {
        Ok(_) => (StatusCode::ACCEPTED, Json(json!({ "status": "queued" }))).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 获取项目的爬取状态
pub async fn get_crawl_status<PR, CR, RR, NR>(
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
    match use_case.crawl_status(&user.user_id, project_id).await {
        Ok(progress) => (StatusCode::OK, Json(progress)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 获取项目的页面性能指标
pub async fn get_crawl_results<PR, CR, RR, NR>(
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
    match use_case.crawl_results(&user.user_id, project_id).await {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<CrawlUseCaseError> for (StatusCode, String) {
    fn from(err: CrawlUseCaseError) -> Self {
        match err {
            CrawlUseCaseError::NotFound
            | CrawlUseCaseError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "Project not found".to_string())
            }
            CrawlUseCaseError::Repository(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }
}
