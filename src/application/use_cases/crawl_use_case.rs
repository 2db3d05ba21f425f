// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::{
    models::{crawl::CrawlProgress, notification::Notification, page_metrics::PageMetrics},
    repositories::{
        crawl_repository::CrawlRepository,
        crawl_result_repository::CrawlResultRepository,
        notification_repository::NotificationRepository,
        project_repository::{ProjectRepository, RepositoryError},
    },
};
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CrawlUseCaseError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Project not found")]
    NotFound,
}

/// 爬取用例
///
/// 入队、状态、结果与通知都以项目为单位，先校验归属再访问数据。
pub struct CrawlUseCase<PR, CR, RR, NR> {
    project_repo: Arc<PR>,
    crawl_repo: Arc<CR>,
    result_repo: Arc<RR>,
    notification_repo: Arc<NR>,
}

impl<PR, CR, RR, NR> CrawlUseCase<PR, CR, RR, NR>
where
    PR: ProjectRepository + 'static,
    CR: CrawlRepository + 'static,
    RR: CrawlResultRepository + 'static,
    NR: NotificationRepository + 'static,
{
    pub fn new(
        project_repo: Arc<PR>,
        crawl_repo: Arc<CR>,
        result_repo: Arc<RR>,
        notification_repo: Arc<NR>,
    ) -> Self {
        Self {
            project_repo,
            crawl_repo,
            result_repo,
            notification_repo,
        }
    }

    async fn ensure_owned(
        &self,
        owner_id: &str,
        project_id: i32,
    ) -> Result<(), CrawlUseCaseError> {
        match self.project_repo.find_by_id(project_id).await? {
            Some(project) if project.owner_id == owner_id => Ok(()),
            // Someone else's project reads the same as a missing one.
            _ => Err(CrawlUseCaseError::NotFound),
        }
    }

    /// 触发一次新的爬取
    ///
    /// 入队事务清空上一代的结果与通知，之后的状态读取从queued重新开始。
    pub async fn start_crawl(
        &self,
        owner_id: &str,
        project_id: i32,
    ) -> Result<(), CrawlUseCaseError> {
        self.ensure_owned(owner_id, project_id).await?;
        self.crawl_repo.enqueue(project_id).await?;

        counter!("crawl_enqueued_total").increment(1);
        info!(project_id, "crawl job enqueued");
        Ok(())
    }

    pub async fn crawl_status(
        &self,
        owner_id: &str,
        project_id: i32,
    ) -> Result<CrawlProgress, CrawlUseCaseError> {
        self.ensure_owned(owner_id, project_id).await?;
        Ok(self.crawl_repo.progress(project_id).await?)
    }

    pub async fn crawl_results(
        &self,
        owner_id: &str,
        project_id: i32,
    ) -> Result<Vec<PageMetrics>, CrawlUseCaseError> {
        self.ensure_owned(owner_id, project_id).await?;
        Ok(self.result_repo.metrics_by_project(project_id).await?)
    }

    pub async fn notifications(
        &self,
        owner_id: &str,
        project_id: i32,
    ) -> Result<Vec<Notification>, CrawlUseCaseError> {
        self.ensure_owned(owner_id, project_id).await?;
        Ok(self.notification_repo.list_by_project(project_id).await?)
    }
}
