// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::Notification;
use crate::domain::repositories::notification_repository::NotificationRepository;
use crate::domain::repositories::project_repository::RepositoryError;
use crate::infrastructure::database::entities::project_notification;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

/// 通知仓库的SeaORM实现
pub struct NotificationRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<project_notification::Model> for Notification {
    fn from(model: project_notification::Model) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            url: model.url,
            category: model.category,
            message: model.message,
            timestamp: model.timestamp.into(),
        }
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryImpl {
    async fn list_by_project(&self, project_id: i32) -> Result<Vec<Notification>, RepositoryError> {
        let models = project_notification::Entity::find()
            .filter(project_notification::Column::ProjectId.eq(project_id))
            .order_by_desc(project_notification::Column::Timestamp)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
