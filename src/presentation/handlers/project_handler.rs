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
    application::{
        dto::project_request::{CreateProjectRequestDto, UpdateProjectRequestDto},
        use_cases::project_use_case::{ProjectUseCase, ProjectUseCaseError},
    },
    domain::repositories::project_repository::{ProjectRepository, RepositoryError},
    infrastructure::identity::AuthUser,
};

/// 注册新项目
pub async fn create_project<PR>(
    Extension(project_repo): Extension<Arc<PR>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateProjectRequestDto>,
) -> impl IntoResponse
where
    PR: ProjectRepository + 'static,
{
    let use_case = ProjectUseCase::new(project_repo);
    match use_case.create_project(&user.user_id, payload).await {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 列出当前用户的项目
pub async fn list_projects<PR>(
    Extension(project_repo): Extension<Arc<PR>>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse
where
    PR: ProjectRepository + 'static,
{
    let use_case = ProjectUseCase::new(project_repo);
    match use_case.list_projects(&user.user_id).await {
        Ok(projects) => (StatusCode::OK, Json(projects)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 获取项目详情
pub async fn get_project<PR>(
    Extension(project_repo): Extension<Arc<PR>>,
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<i32>,
) -> impl IntoResponse
where
    PR: ProjectRepository + 'static,
{
    let use_case = ProjectUseCase::new(project_repo);
    match use_case.get_project(&user.user_id, project_id).await {
        Ok(project) => (StatusCode::OK, Json(project)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 更新项目URL
pub async fn update_project<PR>(
    Extension(project_repo): Extension<Arc<PR>>,
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<i32>,
    Json(payload): Json<UpdateProjectRequestDto>,
) -> impl IntoResponse
where
    PR: ProjectRepository + 'static,
{
    let use_case = ProjectUseCase::new(project_repo);
    match use_case
        .update_project(&user.user_id, project_id, payload)
        .await
    {
        Ok(project) => (StatusCode::OK, Json(project)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 删除项目及其全部爬取数据
pub async fn delete_project<PR>(
    Extension(project_repo): Extension<Arc<PR>>,
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<i32>,
) -> impl IntoResponse
where
    PR: ProjectRepository + 'static,
{
    let use_case = ProjectUseCase::new(project_repo);
    match use_case.delete_project(&user.user_id, project_id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<ProjectUseCaseError> for (StatusCode, String) {
    fn from(err: ProjectUseCaseError) -> Self {
        match err {
            ProjectUseCaseError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ProjectUseCaseError::NotFound
            | ProjectUseCaseError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "Project not found".to_string())
            }
            ProjectUseCaseError::Repository(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
