// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 为爬取结果表补充原始页面内容与抓取时间列
///
/// 爬虫进程随性能指标一起写入这两列；API 的指标投影不读取它们。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One column per statement so the alter also runs on SQLite.
        manager
            .alter_table(
                Table::alter()
                    .table(CrawlResult::Table)
                    .add_column(ColumnDef::new(CrawlResult::Html).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(CrawlResult::Table)
                    .add_column(
                        ColumnDef::new(CrawlResult::TimeCrawled)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(CrawlResult::Table)
                    .drop_column(CrawlResult::TimeCrawled)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(CrawlResult::Table)
                    .drop_column(CrawlResult::Html)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CrawlResult {
    Table,
    Html,
    TimeCrawled,
}
