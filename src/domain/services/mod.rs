// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含跨实体的业务规则：
/// - 计费服务（billing_service）：把计费提供方的webhook事件
///   映射为订阅状态转换
pub mod billing_service;
