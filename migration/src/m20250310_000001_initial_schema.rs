// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 数据库初始模式迁移
///
/// 表名和列名是与外部爬虫进程共享的契约，不可更改。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    /// 应用数据库迁移
    ///
    /// # 参数
    ///
    /// * `manager` - 数据库模式管理器
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 迁移成功
    /// * `Err(DbErr)` - 迁移失败
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Create projects table (No dependencies)
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::OwnerId).string().not_null())
                    .col(ColumnDef::new(Projects::Url).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 2. Create crawl_queue table (Depends on Projects)
        //
        // Row presence is the "crawl requested and not finished" signal; there is
        // no status column. The external worker deletes the row it consumed, so
        // the row needs its own primary key.
        manager
            .create_table(
                Table::create()
                    .table(CrawlQueue::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrawlQueue::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrawlQueue::ProjectId).integer().not_null())
                    .col(
                        ColumnDef::new(CrawlQueue::EnqueuedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Inline so the constraint also exists on SQLite, which cannot
                    // add foreign keys through ALTER TABLE.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crawl_queue_project")
                            .from(CrawlQueue::Table, CrawlQueue::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Create crawl_result table (written by the external worker)
        //
        // Deliberately no foreign key: the worker inserts rows on its own clock
        // and must not fail mid-crawl because the API dropped the project; the
        // API's cascade delete is the cleanup path.
        manager
            .create_table(
                Table::create()
                    .table(CrawlResult::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrawlResult::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrawlResult::ProjectId).integer().not_null())
                    .col(ColumnDef::new(CrawlResult::Url).string().not_null())
                    .col(ColumnDef::new(CrawlResult::TtfbMs).double().null())
                    .col(ColumnDef::new(CrawlResult::RenderTimeMs).double().null())
                    .to_owned(),
            )
            .await?;

        // 4. Create project_notifications table (written by the external worker)
        manager
            .create_table(
                Table::create()
                    .table(ProjectNotifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectNotifications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectNotifications::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectNotifications::Url).string().not_null())
                    .col(
                        ColumnDef::new(ProjectNotifications::Category)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectNotifications::Message)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectNotifications::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 5. Create subscriptions table (keyed by identity-provider user id)
        manager
            .create_table(
                Table::create()
                    .table(Subscriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subscriptions::UserId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subscriptions::Status).string().not_null())
                    .col(
                        ColumnDef::new(Subscriptions::ValidUntil)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Subscriptions::CustomerId).string().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    /// 回滚数据库迁移
    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subscriptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectNotifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CrawlResult::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CrawlQueue::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    OwnerId,
    Url,
}

#[derive(DeriveIden)]
enum CrawlQueue {
    Table,
    Id,
    ProjectId,
    EnqueuedAt,
}

#[derive(DeriveIden)]
enum CrawlResult {
    Table,
    Id,
    ProjectId,
    Url,
    TtfbMs,
    RenderTimeMs,
}

#[derive(DeriveIden)]
enum ProjectNotifications {
    Table,
    Id,
    ProjectId,
    Url,
    Category,
    Message,
    Timestamp,
}

#[derive(DeriveIden)]
enum Subscriptions {
    Table,
    UserId,
    Status,
    ValidUntil,
    CustomerId,
}
