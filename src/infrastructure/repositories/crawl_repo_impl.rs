// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl::CrawlProgress;
use crate::domain::repositories::crawl_repository::CrawlRepository;
use crate::domain::repositories::project_repository::RepositoryError;
use crate::infrastructure::database::entities::{
    crawl_queue, crawl_result, project, project_notification,
};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    IsolationLevel, PaginatorTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;

/// 爬取仓库的SeaORM实现
///
/// 队列生命周期的唯一写入方：入队事务负责清理上一代数据并插入新的队列行，
/// 状态读取在单一快照内完成两次计数。
pub struct CrawlRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CrawlRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrawlRepository for CrawlRepositoryImpl {
    async fn enqueue(&self, project_id: i32) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;

        // The project row lock serializes concurrent enqueues for the same
        // project on Postgres; SQLite serializes through its single writer.
        // A missing row means the project was deleted under us.
        let locked = project::Entity::find_by_id(project_id)
            .lock_exclusive()
            .one(&txn)
            .await?;
        if locked.is_none() {
            return Err(RepositoryError::NotFound);
        }

        let stale_results = crawl_result::Entity::delete_many()
            .filter(crawl_result::Column::ProjectId.eq(project_id))
            .exec(&txn)
            .await?;
        let stale_notifications = project_notification::Entity::delete_many()
            .filter(project_notification::Column::ProjectId.eq(project_id))
            .exec(&txn)
            .await?;
        // A pending entry is superseded rather than stacked, so one project
        // never holds more than one queue row.
        crawl_queue::Entity::delete_many()
            .filter(crawl_queue::Column::ProjectId.eq(project_id))
            .exec(&txn)
            .await?;

        let entry = crawl_queue::ActiveModel {
            project_id: Set(project_id),
            enqueued_at: Set(Utc::now().into()),
            ..Default::default()
        };
        entry.insert(&txn).await?;

        txn.commit().await?;

        debug!(
            project_id,
            stale_results = stale_results.rows_affected,
            stale_notifications = stale_notifications.rows_affected,
            "crawl enqueued"
        );
        Ok(())
    }

    async fn progress(&self, project_id: i32) -> Result<CrawlProgress, RepositoryError> {
        // Both counts have to come from one snapshot or a worker finishing
        // between them fabricates a state the tables never held. REPEATABLE
        // READ pins the snapshot on Postgres; SQLite transactions already do.
        let txn = if self.db.get_database_backend() == DbBackend::Postgres {
            self.db
                .begin_with_config(Some(IsolationLevel::RepeatableRead), None)
                .await?
        } else {
            self.db.begin().await?
        };

        let queue_entries = crawl_queue::Entity::find()
            .filter(crawl_queue::Column::ProjectId.eq(project_id))
            .count(&txn)
            .await?;
        let result_rows = crawl_result::Entity::find()
            .filter(crawl_result::Column::ProjectId.eq(project_id))
            .count(&txn)
            .await?;

        txn.commit().await?;

        Ok(CrawlProgress::from_counts(queue_entries, result_rows))
    }
}
