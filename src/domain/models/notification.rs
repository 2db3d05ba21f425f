// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 项目通知
///
/// 爬虫进程在爬取过程中写入的诊断事件（外链问题、可访问性、SEO、
/// 重定向等）。本服务只读；删除仅发生在队列管理器的代际重置和
/// 项目的级联删除事务内。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// 通知唯一标识符
    pub id: i32,
    /// 所属项目ID
    pub project_id: i32,
    /// 触发通知的页面URL
    pub url: String,
    /// 通知类别，由爬虫定义（如 external_resource、accessibility、seo、redirect）
    pub category: String,
    /// 通知内容
    pub message: String,
    /// 通知时间
    pub timestamp: DateTime<Utc>,
}
