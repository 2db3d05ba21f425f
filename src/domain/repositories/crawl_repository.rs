// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl::CrawlProgress;
use crate::domain::repositories::project_repository::RepositoryError;
use async_trait::async_trait;

/// 爬取仓库特质
///
/// 队列管理器与状态解析器共同的持久化契约。两者操作同样的两张表
/// （crawl_queue、crawl_result），因此共享一个仓库接口。
#[async_trait]
pub trait CrawlRepository: Send + Sync {
    /// 为项目发起新一代爬取
    ///
    /// 在单个事务内完成：删除该项目的全部结果行与通知行，清除
    /// 既有队列行，插入一条带当前时间戳的新队列行。任一步失败
    /// 则整体回滚，绝不残留半代状态。重复入队不是错误，只是再
    /// 次重置代际。
    ///
    /// 项目不存在时返回 [`RepositoryError::NotFound`]；并发入队
    /// 通过项目行锁在存储层串行化。
    async fn enqueue(&self, project_id: i32) -> Result<(), RepositoryError>;

    /// 读取项目当前的爬取进度
    ///
    /// 只读无副作用。队列行数与结果行数必须取自同一快照，避免
    /// 与并发的代际重置交错产生撕裂读。
    async fn progress(&self, project_id: i32) -> Result<CrawlProgress, RepositoryError>;
}
