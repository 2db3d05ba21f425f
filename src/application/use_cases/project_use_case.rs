// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::dto::project_request::{CreateProjectRequestDto, UpdateProjectRequestDto},
    domain::{
        models::project::Project,
        repositories::project_repository::{ProjectRepository, RepositoryError},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use validator::Validate;

#[derive(Error, Debug)]
pub enum ProjectUseCaseError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Project not found")]
    NotFound,
}

/// 项目用例
///
/// 所有按ID的访问都校验归属，归属不符与不存在返回同一种错误，
/// 避免泄露其他用户的项目是否存在。
pub struct ProjectUseCase<PR> {
    project_repo: Arc<PR>,
}

impl<PR> ProjectUseCase<PR>
where
    PR: ProjectRepository + 'static,
{
    pub fn new(project_repo: Arc<PR>) -> Self {
        Self { project_repo }
    }

    pub async fn create_project(
        &self,
        owner_id: &str,
        dto: CreateProjectRequestDto,
    ) -> Result<Project, ProjectUseCaseError> {
        dto.validate()
            .map_err(|e| ProjectUseCaseError::ValidationError(e.to_string()))?;

        let project = self.project_repo.create(owner_id, &dto.url).await?;
        info!(project_id = project.id, owner_id, "project created");
        Ok(project)
    }

    pub async fn list_projects(&self, owner_id: &str) -> Result<Vec<Project>, ProjectUseCaseError> {
        Ok(self.project_repo.list_by_owner(owner_id).await?)
    }

    pub async fn get_project(
        &self,
        owner_id: &str,
        project_id: i32,
    ) -> Result<Project, ProjectUseCaseError> {
        let Some(project) = self.project_repo.find_by_id(project_id).await? else {
            return Err(ProjectUseCaseError::NotFound);
        };
        if project.owner_id != owner_id {
            return Err(ProjectUseCaseError::NotFound);
        }
        Ok(project)
    }

    pub async fn update_project(
        &self,
        owner_id: &str,
        project_id: i32,
        dto: UpdateProjectRequestDto,
    ) -> Result<Project, ProjectUseCaseError> {
        dto.validate()
            .map_err(|e| ProjectUseCaseError::ValidationError(e.to_string()))?;

        self.get_project(owner_id, project_id).await?;
        Ok(self.project_repo.update_url(project_id, &dto.url).await?)
    }

    pub async fn delete_project(
        &self,
        owner_id: &str,
        project_id: i32,
    ) -> Result<(), ProjectUseCaseError> {
        self.get_project(owner_id, project_id).await?;
        self.project_repo.delete(project_id).await?;
        info!(project_id, owner_id, "project deleted");
        Ok(())
    }
}
