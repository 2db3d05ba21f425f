// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于SeaORM实现领域层定义的仓库接口：
/// - 项目仓库实现（project_repo_impl）：CRUD与级联删除事务
/// - 爬取仓库实现（crawl_repo_impl）：代际重置事务与快照状态读取
/// - 爬取结果仓库实现（crawl_result_repo_impl）：指标投影
/// - 通知仓库实现（notification_repo_impl）：通知列表
/// - 订阅仓库实现（subscription_repo_impl）：订阅读写
pub mod crawl_repo_impl;
pub mod crawl_result_repo_impl;
pub mod notification_repo_impl;
pub mod project_repo_impl;
pub mod subscription_repo_impl;
