// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块提供与外部系统的集成：
/// - 数据库（database）：连接池与SeaORM实体定义
/// - 仓库实现（repositories）：领域仓库接口的SeaORM实现
/// - 身份（identity）：身份提供方令牌的离线校验
/// - 计费（billing）：计费webhook的签名校验
/// - 指标（metrics）：Prometheus指标导出
pub mod billing;
pub mod database;
pub mod identity;
pub mod metrics;
pub mod repositories;
