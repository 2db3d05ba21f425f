// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 爬取状态枚举
///
/// 系统不持久化状态列，状态由两张表的行存在性推导：
/// 队列行表示"已请求且未知完成"，结果行表示"爬虫已产出页面"。
/// 状态转换遵循以下流程：
/// NotStarted → Queued → InProgress → Completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CrawlStatus {
    /// 从未发起爬取
    #[default]
    NotStarted,
    /// 已入队，爬虫尚未产出结果
    Queued,
    /// 爬虫正在写入结果
    InProgress,
    /// 队列行已被爬虫移除，结果保留
    Completed,
}

impl CrawlStatus {
    /// 由队列行数与结果行数推导爬取状态
    ///
    /// 这是全系统唯一的状态判定函数，表示层和存储层一律复用，
    /// 不得各自重新推导。
    ///
    /// | 队列行 | 结果行 | 状态 |
    /// |---|---|---|
    /// | >0 | =0 | Queued |
    /// | >0 | >0 | InProgress |
    /// | =0 | >0 | Completed |
    /// | =0 | =0 | NotStarted |
    pub fn from_counts(queue_entries: u64, result_rows: u64) -> Self {
        match (queue_entries > 0, result_rows > 0) {
            (true, false) => CrawlStatus::Queued,
            (true, true) => CrawlStatus::InProgress,
            (false, true) => CrawlStatus::Completed,
            (false, false) => CrawlStatus::NotStarted,
        }
    }
}

/// 将爬取状态格式化为字符串表示
///
/// 用于日志记录、API响应和状态显示
impl fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CrawlStatus::NotStarted => write!(f, "not_started"),
            CrawlStatus::Queued => write!(f, "queued"),
            CrawlStatus::InProgress => write!(f, "in_progress"),
            CrawlStatus::Completed => write!(f, "completed"),
        }
    }
}

/// 从字符串解析爬取状态
impl FromStr for CrawlStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(CrawlStatus::NotStarted),
            "queued" => Ok(CrawlStatus::Queued),
            "in_progress" => Ok(CrawlStatus::InProgress),
            "completed" => Ok(CrawlStatus::Completed),
            _ => Err(()),
        }
    }
}

/// 爬取进度
///
/// 状态解析器对单个项目的一次快照读取结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlProgress {
    /// 推导出的爬取状态
    pub status: CrawlStatus,
    /// 本代爬取已产出的页面数
    pub pages_crawled: u64,
}

impl CrawlProgress {
    /// 由单次快照内读取的两个行数构造进度
    pub fn from_counts(queue_entries: u64, result_rows: u64) -> Self {
        let status = CrawlStatus::from_counts(queue_entries, result_rows);
        let pages_crawled = match status {
            CrawlStatus::InProgress | CrawlStatus::Completed => result_rows,
            CrawlStatus::NotStarted | CrawlStatus::Queued => 0,
        };
        Self {
            status,
            pages_crawled,
        }
    }
}
