// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::subscription::Subscription;
use crate::domain::repositories::project_repository::RepositoryError;
use crate::domain::repositories::subscription_repository::SubscriptionRepository;
use crate::infrastructure::database::entities::subscription;
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

/// 订阅仓库的SeaORM实现
pub struct SubscriptionRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl SubscriptionRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<subscription::Model> for Subscription {
    fn from(model: subscription::Model) -> Self {
        Self {
            user_id: model.user_id,
            status: model.status.parse().unwrap_or_default(),
            valid_until: model.valid_until.into(),
            customer_id: model.customer_id,
        }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionRepositoryImpl {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Subscription>, RepositoryError> {
        let model = subscription::Entity::find_by_id(user_id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn upsert(&self, sub: &Subscription) -> Result<(), RepositoryError> {
        let active = subscription::ActiveModel {
            user_id: Set(sub.user_id.clone()),
            status: Set(sub.status.to_string()),
            valid_until: Set(sub.valid_until.into()),
            customer_id: Set(sub.customer_id.clone()),
        };

        // Webhook replays and repeated reads write the same row, so the
        // insert folds into an update on conflict.
        subscription::Entity::insert(active)
            .on_conflict(
                OnConflict::column(subscription::Column::UserId)
                    .update_columns([
                        subscription::Column::Status,
                        subscription::Column::ValidUntil,
                        subscription::Column::CustomerId,
                    ])
                    .to_owned(),
            )
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }

    async fn find_user_by_customer(
        &self,
        customer_id: &str,
    ) -> Result<Option<String>, RepositoryError> {
        let model = subscription::Entity::find()
            .filter(subscription::Column::CustomerId.eq(customer_id))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(|m| m.user_id))
    }
}
