// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page_metrics::PageMetrics;
use crate::domain::repositories::project_repository::RepositoryError;
use async_trait::async_trait;

/// 爬取结果仓库特质
///
/// 结果行由外部爬虫进程写入，本服务只读。删除不在此接口上：
/// 代际重置与级联删除各自在自己的事务内直接清表。
#[async_trait]
pub trait CrawlResultRepository: Send + Sync {
    /// 按渲染耗时降序列出项目的页面指标
    ///
    /// NULL 指标映射为 0。
    async fn metrics_by_project(&self, project_id: i32)
        -> Result<Vec<PageMetrics>, RepositoryError>;
}
