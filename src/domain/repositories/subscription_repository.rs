// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::subscription::Subscription;
use crate::domain::repositories::project_repository::RepositoryError;
use async_trait::async_trait;

/// 订阅仓库特质
///
/// 订阅按用户至多一行。计费webhook通过客户ID反查用户，
/// 结账完成事件写入这一关联。
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// 根据用户ID查找订阅
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Subscription>, RepositoryError>;
    /// 写入订阅（按用户ID插入或整行覆盖）
    async fn upsert(&self, subscription: &Subscription) -> Result<(), RepositoryError>;
    /// 根据计费客户ID反查用户ID
    async fn find_user_by_customer(
        &self,
        customer_id: &str,
    ) -> Result<Option<String>, RepositoryError>;
}
