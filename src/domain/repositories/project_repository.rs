// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::project::Project;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 项目仓库特质
///
/// 定义项目数据访问接口。删除是级联的：项目的队列行、结果行和
/// 通知行在同一事务内一并清除，保证不残留孤儿爬取数据。
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// 创建新项目
    async fn create(&self, owner_id: &str, url: &str) -> Result<Project, RepositoryError>;
    /// 根据ID查找项目
    async fn find_by_id(&self, id: i32) -> Result<Option<Project>, RepositoryError>;
    /// 列出某用户的全部项目
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Project>, RepositoryError>;
    /// 更新项目URL
    async fn update_url(&self, id: i32, url: &str) -> Result<Project, RepositoryError>;
    /// 删除项目并级联清除其全部爬取产物
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
