// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 项目（project）：用户注册的待监测站点
/// - 爬取进度（crawl）：由队列与结果表状态推导的爬取状态
/// - 页面指标（page_metrics）：单页性能指标投影
/// - 通知（notification）：爬虫进程产生的诊断消息
/// - 订阅（subscription）：用户的计费订阅状态
///
/// 这些模型构成了系统的数据基础，定义了业务概念的
/// 结构和行为，是领域驱动设计的核心组成部分。
pub mod crawl;
pub mod notification;
pub mod page_metrics;
pub mod project;
pub mod subscription;
