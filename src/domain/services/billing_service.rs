// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::subscription::{Subscription, SubscriptionStatus};
use crate::domain::repositories::project_repository::RepositoryError;
use crate::domain::repositories::subscription_repository::SubscriptionRepository;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// 付费订阅的开放式有效期（天）
///
/// 续费由计费提供方管理，本服务只在事件到达时改写状态；
/// 远期有效期表示"直到收到相反的事件为止"。
const PREMIUM_OPEN_ENDED_DAYS: i64 = 3650;

/// 计费服务错误类型
#[derive(Error, Debug)]
pub enum BillingServiceError {
    #[error("Malformed billing event: {0}")]
    MalformedEvent(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 计费提供方的webhook事件
///
/// 只解析本服务关心的三类事件，其余类型保留原始类型名
/// 以便确认并忽略。
#[derive(Debug, Clone, PartialEq)]
pub enum BillingEvent {
    /// 结账完成：用户与计费客户建立关联并升级为付费
    CheckoutCompleted {
        user_id: String,
        customer_id: String,
    },
    /// 订阅变更：按提供方侧状态改写本地订阅
    SubscriptionUpdated {
        customer_id: String,
        provider_status: String,
        cancel_at_period_end: bool,
        current_period_end: Option<DateTime<Utc>>,
    },
    /// 订阅删除：立即降级为免费
    SubscriptionDeleted { customer_id: String },
    /// 其他事件：确认但不处理
    Ignored { event_type: String },
}

#[derive(Deserialize)]
struct EventEnvelope {
    #[serde(rename = "type")]
    event_type: String,
    data: EventData,
}

#[derive(Deserialize)]
struct EventData {
    object: serde_json::Value,
}

#[derive(Deserialize)]
struct CheckoutSessionObject {
    client_reference_id: Option<String>,
    customer: Option<String>,
}

#[derive(Deserialize)]
struct SubscriptionObject {
    customer: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    cancel_at_period_end: bool,
    current_period_end: Option<i64>,
}

impl BillingEvent {
    /// 从已验证签名的原始webhook负载解析事件
    ///
    /// 结账事件缺少 `client_reference_id` 或 `customer` 时归入
    /// [`BillingEvent::Ignored`]：提供方也会为非本服务发起的结账
    /// 发送该事件，确认掉比报错更合适。
    pub fn parse(payload: &str) -> Result<Self, BillingServiceError> {
        let envelope: EventEnvelope = serde_json::from_str(payload)
            .map_err(|e| BillingServiceError::MalformedEvent(e.to_string()))?;

        let event = match envelope.event_type.as_str() {
            "checkout.session.completed" => {
                let session: CheckoutSessionObject =
                    serde_json::from_value(envelope.data.object)
                        .map_err(|e| BillingServiceError::MalformedEvent(e.to_string()))?;
                match (session.client_reference_id, session.customer) {
                    (Some(user_id), Some(customer_id)) => BillingEvent::CheckoutCompleted {
                        user_id,
                        customer_id,
                    },
                    _ => BillingEvent::Ignored {
                        event_type: envelope.event_type,
                    },
                }
            }
            "customer.subscription.updated" => {
                let sub: SubscriptionObject = serde_json::from_value(envelope.data.object)
                    .map_err(|e| BillingServiceError::MalformedEvent(e.to_string()))?;
                BillingEvent::SubscriptionUpdated {
                    customer_id: sub.customer,
                    provider_status: sub.status,
                    cancel_at_period_end: sub.cancel_at_period_end,
                    current_period_end: sub
                        .current_period_end
                        .and_then(|secs| DateTime::from_timestamp(secs, 0)),
                }
            }
            "customer.subscription.deleted" => {
                let sub: SubscriptionObject = serde_json::from_value(envelope.data.object)
                    .map_err(|e| BillingServiceError::MalformedEvent(e.to_string()))?;
                BillingEvent::SubscriptionDeleted {
                    customer_id: sub.customer,
                }
            }
            _ => BillingEvent::Ignored {
                event_type: envelope.event_type,
            },
        };

        Ok(event)
    }
}

/// 计费服务
///
/// 把计费提供方的事件映射为订阅状态转换。事件处理在效果上幂等：
/// 重放同一事件写入相同的订阅状态。
pub struct BillingService<SR> {
    subscription_repo: Arc<SR>,
}

impl<SR> BillingService<SR>
where
    SR: SubscriptionRepository + 'static,
{
    pub fn new(subscription_repo: Arc<SR>) -> Self {
        Self { subscription_repo }
    }

    /// 应用一个计费事件
    ///
    /// 无法归属到已知用户的事件确认并告警，不视为失败，
    /// 避免提供方无意义地重试。
    pub async fn handle_event(
        &self,
        event: BillingEvent,
        now: DateTime<Utc>,
    ) -> Result<(), BillingServiceError> {
        match event {
            BillingEvent::CheckoutCompleted {
                user_id,
                customer_id,
            } => {
                let subscription = Subscription {
                    user_id: user_id.clone(),
                    status: SubscriptionStatus::Premium,
                    valid_until: now + Duration::days(PREMIUM_OPEN_ENDED_DAYS),
                    customer_id: Some(customer_id),
                };
                self.subscription_repo.upsert(&subscription).await?;
                info!(user_id = %user_id, "checkout completed, subscription upgraded");
                Ok(())
            }
            BillingEvent::SubscriptionUpdated {
                customer_id,
                provider_status,
                cancel_at_period_end,
                current_period_end,
            } => {
                let Some(user_id) = self
                    .subscription_repo
                    .find_user_by_customer(&customer_id)
                    .await?
                else {
                    warn!(customer_id = %customer_id, "subscription update for unknown customer");
                    return Ok(());
                };

                let subscription = match provider_status.as_str() {
                    "trialing" => Subscription {
                        user_id: user_id.clone(),
                        status: SubscriptionStatus::Premium,
                        valid_until: current_period_end
                            .unwrap_or(now + Duration::days(PREMIUM_OPEN_ENDED_DAYS)),
                        customer_id: Some(customer_id),
                    },
                    "active" if cancel_at_period_end => Subscription {
                        // Premium runs out at the period end the user already paid for.
                        user_id: user_id.clone(),
                        status: SubscriptionStatus::Premium,
                        valid_until: current_period_end.unwrap_or(now),
                        customer_id: Some(customer_id),
                    },
                    "active" => Subscription {
                        user_id: user_id.clone(),
                        status: SubscriptionStatus::Premium,
                        valid_until: now + Duration::days(PREMIUM_OPEN_ENDED_DAYS),
                        customer_id: Some(customer_id),
                    },
                    "past_due" | "unpaid" | "incomplete" | "incomplete_expired" | "canceled" => {
                        Subscription {
                            user_id: user_id.clone(),
                            status: SubscriptionStatus::Free,
                            valid_until: now,
                            customer_id: Some(customer_id),
                        }
                    }
                    other => {
                        warn!(status = %other, user_id = %user_id, "unhandled provider subscription status");
                        return Ok(());
                    }
                };

                self.subscription_repo.upsert(&subscription).await?;
                info!(user_id = %user_id, status = %subscription.status, "subscription updated");
                Ok(())
            }
            BillingEvent::SubscriptionDeleted { customer_id } => {
                let Some(user_id) = self
                    .subscription_repo
                    .find_user_by_customer(&customer_id)
                    .await?
                else {
                    warn!(customer_id = %customer_id, "subscription delete for unknown customer");
                    return Ok(());
                };

                let subscription = Subscription {
                    user_id: user_id.clone(),
                    status: SubscriptionStatus::Free,
                    valid_until: now,
                    customer_id: Some(customer_id),
                };
                self.subscription_repo.upsert(&subscription).await?;
                info!(user_id = %user_id, "subscription deleted, downgraded to free");
                Ok(())
            }
            BillingEvent::Ignored { event_type } => {
                info!(event_type = %event_type, "ignoring billing event");
                Ok(())
            }
        }
    }
}
