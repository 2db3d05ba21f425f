// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 试用期时长（天）
pub const TRIAL_PERIOD_DAYS: i64 = 7;

/// 订阅状态枚举
///
/// 状态转换由计费提供方的webhook事件驱动：
/// Trial → Premium（付费）或 Free（到期），Premium → Free（取消/欠费/到期）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// 免费
    #[default]
    Free,
    /// 试用期
    Trial,
    /// 付费
    Premium,
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubscriptionStatus::Free => write!(f, "free"),
            SubscriptionStatus::Trial => write!(f, "trial"),
            SubscriptionStatus::Premium => write!(f, "premium"),
        }
    }
}

impl FromStr for SubscriptionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(SubscriptionStatus::Free),
            "trial" => Ok(SubscriptionStatus::Trial),
            "premium" => Ok(SubscriptionStatus::Premium),
            _ => Err(()),
        }
    }
}

/// 订阅实体
///
/// 每个用户至多一行，首次读取时自动开通试用。`customer_id` 在
/// 结账完成事件中回填，此后计费事件通过它反查用户。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// 用户ID，身份提供方颁发
    pub user_id: String,
    /// 订阅状态
    pub status: SubscriptionStatus,
    /// 当前状态的有效期
    pub valid_until: DateTime<Utc>,
    /// 计费提供方的客户ID
    pub customer_id: Option<String>,
}

impl Subscription {
    /// 为新用户开通试用订阅
    pub fn trial(user_id: String, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            status: SubscriptionStatus::Trial,
            valid_until: now + Duration::days(TRIAL_PERIOD_DAYS),
            customer_id: None,
        }
    }

    /// 当前状态是否已过期
    ///
    /// 只有试用与付费会过期；免费状态永不过期。
    pub fn has_lapsed(&self, now: DateTime<Utc>) -> bool {
        self.status != SubscriptionStatus::Free && self.valid_until < now
    }
}
