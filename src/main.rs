// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use migration::{Migrator, MigratorTrait};
use sitepulse::config::settings::Settings;
use sitepulse::infrastructure::database::connection;
use sitepulse::infrastructure::identity::{JwksVerifier, TokenVerifier};
use sitepulse::presentation::routes;
use sitepulse::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting sitepulse...");

    // Initialize Prometheus Metrics
    sitepulse::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize token verification against the identity provider
    let verifier: Arc<dyn TokenVerifier> = Arc::new(JwksVerifier::new(&settings.identity));
    info!("Token verifier initialized");

    // 5. Build routes and start HTTP server
    let app = routes::routes(db, verifier, &settings.billing);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
