// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// HTTP处理器、认证中间件与路由组装。
pub mod handlers;
pub mod middleware;
pub mod routes;
