// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub use sea_orm_migration::prelude::*;

mod m20250310_000001_initial_schema;
mod m20250412_000001_add_crawl_result_payload;
mod m20250518_000001_create_indexes;

/// 数据库迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// # 返回值
    ///
    /// 返回迁移列表
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_000001_initial_schema::Migration),
            Box::new(m20250412_000001_add_crawl_result_payload::Migration),
            Box::new(m20250518_000001_create_indexes::Migration),
        ]
    }
}
