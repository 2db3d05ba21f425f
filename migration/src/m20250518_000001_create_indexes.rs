// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 为热点查询路径补充索引
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ownership listing
        manager
            .create_index(
                Index::create()
                    .name("idx_projects_owner_id")
                    .table(Projects::Table)
                    .col(Projects::OwnerId)
                    .to_owned(),
            )
            .await?;

        // Queue presence check and generation reset both filter by project
        manager
            .create_index(
                Index::create()
                    .name("idx_crawl_queue_project_id")
                    .table(CrawlQueue::Table)
                    .col(CrawlQueue::ProjectId)
                    .to_owned(),
            )
            .await?;

        // Result count and render-time ordering for the metrics read
        manager
            .create_index(
                Index::create()
                    .name("idx_crawl_result_project_render_time")
                    .table(CrawlResult::Table)
                    .col(CrawlResult::ProjectId)
                    .col(CrawlResult::RenderTimeMs)
                    .to_owned(),
            )
            .await?;

        // Notification listing, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_project_notifications_project_timestamp")
                    .table(ProjectNotifications::Table)
                    .col(ProjectNotifications::ProjectId)
                    .col(ProjectNotifications::Timestamp)
                    .to_owned(),
            )
            .await?;

        // Billing webhook resolves users by provider customer id
        manager
            .create_index(
                Index::create()
                    .name("idx_subscriptions_customer_id")
                    .table(Subscriptions::Table)
                    .col(Subscriptions::CustomerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_subscriptions_customer_id")
                    .table(Subscriptions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_project_notifications_project_timestamp")
                    .table(ProjectNotifications::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_crawl_result_project_render_time")
                    .table(CrawlResult::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_crawl_queue_project_id")
                    .table(CrawlQueue::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_projects_owner_id")
                    .table(Projects::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    OwnerId,
}

#[derive(DeriveIden)]
enum CrawlQueue {
    Table,
    ProjectId,
}

#[derive(DeriveIden)]
enum CrawlResult {
    Table,
    ProjectId,
    RenderTimeMs,
}

#[derive(DeriveIden)]
enum ProjectNotifications {
    Table,
    ProjectId,
    Timestamp,
}

#[derive(DeriveIden)]
enum Subscriptions {
    Table,
    CustomerId,
}
