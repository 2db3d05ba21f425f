// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::project::Project;
use crate::domain::repositories::project_repository::{ProjectRepository, RepositoryError};
use crate::infrastructure::database::entities::{
    crawl_queue, crawl_result, project, project_notification,
};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::sync::Arc;

/// 项目仓库的SeaORM实现
pub struct ProjectRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<project::Model> for Project {
    fn from(model: project::Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            url: model.url,
        }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryImpl {
    async fn create(&self, owner_id: &str, url: &str) -> Result<Project, RepositoryError> {
        let model = project::ActiveModel {
            owner_id: Set(owner_id.to_string()),
            url: Set(url.to_string()),
            ..Default::default()
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Project>, RepositoryError> {
        let model = project::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Project>, RepositoryError> {
        let models = project::Entity::find()
            .filter(project::Column::OwnerId.eq(owner_id))
            .order_by_asc(project::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update_url(&self, id: i32, url: &str) -> Result<Project, RepositoryError> {
        let Some(model) = project::Entity::find_by_id(id).one(self.db.as_ref()).await? else {
            return Err(RepositoryError::NotFound);
        };

        let mut active: project::ActiveModel = model.into();
        active.url = Set(url.to_string());

        let updated = active.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;

        if project::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(RepositoryError::NotFound);
        }

        // Queue rows first to satisfy the foreign key, then the tables the
        // worker writes without one.
        crawl_queue::Entity::delete_many()
            .filter(crawl_queue::Column::ProjectId.eq(id))
            .exec(&txn)
            .await?;
        crawl_result::Entity::delete_many()
            .filter(crawl_result::Column::ProjectId.eq(id))
            .exec(&txn)
            .await?;
        project_notification::Entity::delete_many()
            .filter(project_notification::Column::ProjectId.eq(id))
            .exec(&txn)
            .await?;
        project::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
