// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含数据库、服务器、身份提供商和账单等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 身份提供商配置
    pub identity: IdentitySettings,
    /// 账单配置
    pub billing: BillingSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 身份提供商配置设置
#[derive(Debug, Deserialize)]
pub struct IdentitySettings {
    /// JWKS端点URL
    pub jwks_url: String,
    /// 期望的令牌签发方
    pub issuer: String,
}

/// 账单配置设置
#[derive(Debug, Deserialize)]
pub struct BillingSettings {
    /// Webhook签名密钥
    pub webhook_secret: String,
    /// 事件时间戳容忍窗口（秒）
    pub tolerance_secs: i64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB settings
            .set_default("database.url", "sqlite::memory:")?
            .set_default("database.max_connections", 100)?
            .set_default("database.min_connections", 10)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default identity settings, a local provider for development
            .set_default(
                "identity.jwks_url",
                "http://127.0.0.1:8090/.well-known/jwks.json",
            )?
            .set_default("identity.issuer", "http://127.0.0.1:8090/")?
            // Default billing settings
            .set_default("billing.webhook_secret", "your-secret-key")?
            .set_default("billing.tolerance_secs", 300)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SITEPULSE").separator("__"));

        builder.build()?.try_deserialize()
    }
}
