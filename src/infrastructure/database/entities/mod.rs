// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// SeaORM实体定义，与迁移中的五张表一一对应。
/// 表结构是与外部爬虫进程共享的契约。
pub mod crawl_queue;
pub mod crawl_result;
pub mod project;
pub mod project_notification;
pub mod subscription;
