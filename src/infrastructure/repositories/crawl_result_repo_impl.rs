// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page_metrics::PageMetrics;
use crate::domain::repositories::crawl_result_repository::CrawlResultRepository;
use crate::domain::repositories::project_repository::RepositoryError;
use crate::infrastructure::database::entities::crawl_result;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

/// 爬取结果仓库的SeaORM实现
pub struct CrawlResultRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CrawlResultRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<crawl_result::Model> for PageMetrics {
    fn from(model: crawl_result::Model) -> Self {
        Self {
            url: model.url,
            // NULL means the worker never took the measurement; clients get 0.
            ttfb_ms: model.ttfb_ms.unwrap_or(0.0),
            render_time_ms: model.render_time_ms.unwrap_or(0.0),
        }
    }
}

#[async_trait]
impl CrawlResultRepository for CrawlResultRepositoryImpl {
    async fn metrics_by_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<PageMetrics>, RepositoryError> {
        let models = crawl_result::Entity::find()
            .filter(crawl_result::Column::ProjectId.eq(project_id))
            .order_by_desc(crawl_result::Column::RenderTimeMs)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
