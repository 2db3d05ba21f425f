// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::Notification;
use crate::domain::repositories::project_repository::RepositoryError;
use async_trait::async_trait;

/// 通知仓库特质
///
/// 只暴露读取。按项目删除通知属于代际生命周期策略，由队列管理器
/// 和项目级联删除在各自事务内完成，不通过本接口。
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// 按时间降序列出项目的通知
    async fn list_by_project(&self, project_id: i32) -> Result<Vec<Notification>, RepositoryError>;
}
