// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 单页性能指标
///
/// 爬取结果行面向客户端的投影，按渲染耗时降序排列（最慢的页面排最前）。
///
/// 爬虫无法测量时结果行中的指标为 NULL，投影一律映射为 0 而不是透传
/// null。这里无法区分"零延迟"与"未测量"，是为兼容既有客户端保留的
/// 既定简化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    /// 页面URL
    pub url: String,
    /// 首字节耗时（毫秒）
    pub ttfb_ms: f64,
    /// 渲染耗时（毫秒）
    pub render_time_ms: f64,
}
