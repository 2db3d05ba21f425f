// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum_test::{TestResponse, TestServer};
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use serde_json::json;
use sitepulse::config::settings::BillingSettings;
use sitepulse::infrastructure::billing;
use sitepulse::infrastructure::database::entities::{
    crawl_queue, crawl_result, project_notification, subscription,
};
use sitepulse::infrastructure::identity::{AuthUser, TokenVerifier, VerifyError};
use sitepulse::presentation::routes;
use std::sync::Arc;

pub const WEBHOOK_SECRET: &str = "whsec_integration";

/// 测试用令牌验证器
///
/// 把令牌原文当作用户ID，跳过真实的JWKS验证。
pub struct StaticTokenVerifier;

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthUser, VerifyError> {
        if token.is_empty() {
            return Err(VerifyError::MissingKeyId);
        }
        Ok(AuthUser {
            user_id: token.to_string(),
        })
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
}

pub async fn create_test_app() -> TestApp {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");
    let db = Arc::new(db);

    Migrator::up(db.as_ref(), None)
        .await
        .expect("Failed to run migrations");

    let billing_settings = BillingSettings {
        webhook_secret: WEBHOOK_SECRET.to_string(),
        tolerance_secs: 300,
    };

    let app = routes::routes(db.clone(), Arc::new(StaticTokenVerifier), &billing_settings);
    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp { server, db }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// 通过API创建项目并返回其ID
pub async fn create_project(app: &TestApp, token: &str, url: &str) -> i32 {
    let response = app
        .server
        .post("/v1/projects")
        .add_header("authorization", bearer(token))
        .json(&json!({ "url": url }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    body["id"].as_i64().expect("project id in response") as i32
}

/// 模拟爬虫写回一个页面的结果行
pub async fn worker_finishes_page(
    db: &DatabaseConnection,
    project_id: i32,
    url: &str,
    ttfb_ms: Option<f64>,
    render_time_ms: Option<f64>,
) {
    crawl_result::ActiveModel {
        project_id: Set(project_id),
        url: Set(url.to_string()),
        ttfb_ms: Set(ttfb_ms),
        render_time_ms: Set(render_time_ms),
        html: Set(Some("<html><body>ok</body></html>".to_string())),
        time_crawled: Set(Some(Utc::now().into())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert crawl result");
}

/// 模拟爬虫写入一条页面通知
pub async fn worker_records_notification(
    db: &DatabaseConnection,
    project_id: i32,
    url: &str,
    category: &str,
    message: &str,
) {
    project_notification::ActiveModel {
        project_id: Set(project_id),
        url: Set(url.to_string()),
        category: Set(category.to_string()),
        message: Set(message.to_string()),
        timestamp: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert notification");
}

/// 模拟爬虫完成整个任务并移除队列条目
pub async fn worker_completes_crawl(db: &DatabaseConnection, project_id: i32) {
    crawl_queue::Entity::delete_many()
        .filter(crawl_queue::Column::ProjectId.eq(project_id))
        .exec(db)
        .await
        .expect("Failed to remove queue entry");
}

pub async fn queue_rows(db: &DatabaseConnection, project_id: i32) -> u64 {
    crawl_queue::Entity::find()
        .filter(crawl_queue::Column::ProjectId.eq(project_id))
        .count(db)
        .await
        .expect("Failed to count queue rows")
}

pub async fn result_rows(db: &DatabaseConnection, project_id: i32) -> u64 {
    crawl_result::Entity::find()
        .filter(crawl_result::Column::ProjectId.eq(project_id))
        .count(db)
        .await
        .expect("Failed to count result rows")
}

pub async fn notification_rows(db: &DatabaseConnection, project_id: i32) -> u64 {
    project_notification::Entity::find()
        .filter(project_notification::Column::ProjectId.eq(project_id))
        .count(db)
        .await
        .expect("Failed to count notification rows")
}

/// 直接落库一条订阅记录
pub async fn seed_subscription(
    db: &DatabaseConnection,
    user_id: &str,
    status: &str,
    valid_until: chrono::DateTime<Utc>,
    customer_id: Option<&str>,
) {
    subscription::ActiveModel {
        user_id: Set(user_id.to_string()),
        status: Set(status.to_string()),
        valid_until: Set(valid_until.into()),
        customer_id: Set(customer_id.map(str::to_string)),
    }
    .insert(db)
    .await
    .expect("Failed to seed subscription");
}

/// 对负载签名后投递账单Webhook
pub async fn post_signed_webhook(app: &TestApp, payload: &str) -> TestResponse {
    let ts = Utc::now().timestamp();
    let header = format!("t={},v1={}", ts, billing::sign(WEBHOOK_SECRET, ts, payload));

    app.server
        .post("/v1/billing/webhook")
        .add_header("Billing-Signature", header)
        .text(payload.to_string())
        .await
}
