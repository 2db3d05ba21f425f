// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::{
    models::subscription::{Subscription, SubscriptionStatus},
    repositories::{
        project_repository::RepositoryError, subscription_repository::SubscriptionRepository,
    },
};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SubscriptionUseCaseError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 订阅用例
///
/// 订阅档位由账单Webhook写入；读路径补两件事：首次访问开通试用，
/// 过期的试用或付费订阅降级为免费并落库。
pub struct SubscriptionUseCase<SR> {
    subscription_repo: Arc<SR>,
}

impl<SR> SubscriptionUseCase<SR>
where
    SR: SubscriptionRepository + 'static,
{
    pub fn new(subscription_repo: Arc<SR>) -> Self {
        Self { subscription_repo }
    }

    pub async fn current(&self, user_id: &str) -> Result<Subscription, SubscriptionUseCaseError> {
        let now = Utc::now();

        match self.subscription_repo.find_by_user(user_id).await? {
            None => {
                // First sight of this user starts the trial clock.
                let subscription = Subscription::trial(user_id.to_string(), now);
                self.subscription_repo.upsert(&subscription).await?;
                info!(user_id, "trial subscription provisioned");
                Ok(subscription)
            }
            Some(subscription) if subscription.has_lapsed(now) => {
                let downgraded = Subscription {
                    status: SubscriptionStatus::Free,
                    valid_until: now,
                    ..subscription
                };
                self.subscription_repo.upsert(&downgraded).await?;
                info!(user_id, "lapsed subscription downgraded");
                Ok(downgraded)
            }
            Some(subscription) => Ok(subscription),
        }
    }
}
