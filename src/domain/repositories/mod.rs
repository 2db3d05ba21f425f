// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 项目仓库（project_repository）：项目CRUD与级联删除
/// - 爬取仓库（crawl_repository）：入队的代际重置与状态快照读取
/// - 爬取结果仓库（crawl_result_repository）：页面指标只读投影
/// - 通知仓库（notification_repository）：项目通知只读列表
/// - 订阅仓库（subscription_repository）：订阅读写与客户ID反查
///
/// 这些接口确保了领域层不依赖于具体的数据存储技术，
/// 提高了系统的可测试性和可维护性.
pub mod crawl_repository;
pub mod crawl_result_repository;
pub mod notification_repository;
pub mod project_repository;
pub mod subscription_repository;
