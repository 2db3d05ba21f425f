// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::BillingSettings;
use crate::domain::services::billing_service::BillingService;
use crate::infrastructure::billing::BillingWebhookVerifier;
use crate::infrastructure::identity::TokenVerifier;
use crate::infrastructure::repositories::crawl_repo_impl::CrawlRepositoryImpl;
use crate::infrastructure::repositories::crawl_result_repo_impl::CrawlResultRepositoryImpl;
use crate::infrastructure::repositories::notification_repo_impl::NotificationRepositoryImpl;
use crate::infrastructure::repositories::project_repo_impl::ProjectRepositoryImpl;
use crate::infrastructure::repositories::subscription_repo_impl::SubscriptionRepositoryImpl;
use crate::presentation::handlers::{
    billing_handler, crawl_handler, notification_handler, project_handler, subscription_handler,
};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{
    routing::{delete, get, post, put},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 公开路由只有健康检查、版本与账单Webhook；其余路由经过认证中间件，
/// 处理器通过请求扩展拿到仓库与已认证用户。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(
    db: Arc<DatabaseConnection>,
    verifier: Arc<dyn TokenVerifier>,
    billing: &BillingSettings,
) -> Router {
    let project_repo = Arc::new(ProjectRepositoryImpl::new(db.clone()));
    let crawl_repo = Arc::new(CrawlRepositoryImpl::new(db.clone()));
    let result_repo = Arc::new(CrawlResultRepositoryImpl::new(db.clone()));
    let notification_repo = Arc::new(NotificationRepositoryImpl::new(db.clone()));
    let subscription_repo = Arc::new(SubscriptionRepositoryImpl::new(db.clone()));

    let billing_service = Arc::new(BillingService::new(subscription_repo.clone()));
    let webhook_verifier = Arc::new(BillingWebhookVerifier::new(
        billing.webhook_secret.clone(),
        billing.tolerance_secs,
    ));

    let auth_state = AuthState { verifier };

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route(
            "/v1/billing/webhook",
            post(billing_handler::handle_webhook::<SubscriptionRepositoryImpl>),
        );

    let protected_routes = Router::new()
        .route(
            "/v1/projects",
            post(project_handler::create_project::<ProjectRepositoryImpl>),
        )
        .route(
            "/v1/projects",
            get(project_handler::list_projects::<ProjectRepositoryImpl>),
        )
        .route(
            "/v1/projects/{id}",
            get(project_handler::get_project::<ProjectRepositoryImpl>),
        )
        .route(
            "/v1/projects/{id}",
            put(project_handler::update_project::<ProjectRepositoryImpl>),
        )
        .route(
            "/v1/projects/{id}",
            delete(project_handler::delete_project::<ProjectRepositoryImpl>),
        )
        .route(
            "/v1/projects/{id}/crawl",
            post(
                crawl_handler::start_crawl::<
                    ProjectRepositoryImpl,
                    CrawlRepositoryImpl,
                    CrawlResultRepositoryImpl,
                    NotificationRepositoryImpl,
                >,
            ),
        )
        .route(
            "/v1/projects/{id}/crawl/status",
            get(crawl_handler::get_crawl_status::<
                ProjectRepositoryImpl,
                CrawlRepositoryImpl,
                CrawlResultRepositoryImpl,
                NotificationRepositoryImpl,
            >),
        )
        .route(
            "/v1/projects/{id}/crawl/results",
            get(crawl_handler::get_crawl_results::<
                ProjectRepositoryImpl,
                CrawlRepositoryImpl,
                CrawlResultRepositoryImpl,
                NotificationRepositoryImpl,
            >),
        )
        .route(
            "/v1/projects/{id}/notifications",
            get(notification_handler::get_notifications::<
                ProjectRepositoryImpl,
                CrawlRepositoryImpl,
                CrawlResultRepositoryImpl,
                NotificationRepositoryImpl,
            >),
        )
        .route(
            "/v1/subscription",
            get(subscription_handler::get_subscription::<SubscriptionRepositoryImpl>),
        )
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(project_repo))
        .layer(Extension(crawl_repo))
        .layer(Extension(result_repo))
        .layer(Extension(notification_repo))
        .layer(Extension(subscription_repo))
        .layer(Extension(billing_service))
        .layer(Extension(webhook_verifier))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
