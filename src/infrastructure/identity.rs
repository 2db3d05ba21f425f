// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::IdentitySettings;
use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// 身份验证错误
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Token rejected: {0}")]
    Rejected(#[from] jsonwebtoken::errors::Error),
    #[error("Token carries no key id")]
    MissingKeyId,
    #[error("No signing key matches kid {0}")]
    UnknownKey(String),
    #[error("Key set fetch failed: {0}")]
    KeySetFetch(#[from] reqwest::Error),
}

/// 已验证的请求主体
///
/// 中间件验证成功后写入请求扩展，处理器从中读取用户标识。
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

/// 令牌验证接口
///
/// 身份由外部提供商签发，本服务只验证签名并提取用户标识。
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<AuthUser, VerifyError>;
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

/// 基于JWKS的令牌验证器
///
/// 从身份提供商拉取公钥集并缓存；遇到未知kid时刷新一次，
/// 以覆盖提供商轮换签名密钥的窗口。
pub struct JwksVerifier {
    client: reqwest::Client,
    jwks_url: String,
    issuer: String,
    keys: RwLock<Option<JwkSet>>,
}

impl JwksVerifier {
    pub fn new(settings: &IdentitySettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            jwks_url: settings.jwks_url.clone(),
            issuer: settings.issuer.clone(),
            keys: RwLock::new(None),
        }
    }

    async fn cached_key(&self, kid: &str) -> Result<Option<DecodingKey>, VerifyError> {
        let guard = self.keys.read().await;
        let Some(set) = guard.as_ref() else {
            return Ok(None);
        };
        match set.find(kid) {
            Some(jwk) => Ok(Some(DecodingKey::from_jwk(jwk)?)),
            None => Ok(None),
        }
    }

    async fn refresh_keys(&self) -> Result<(), VerifyError> {
        let set: JwkSet = self
            .client
            .get(&self.jwks_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(keys = set.keys.len(), "refreshed signing key set");
        *self.keys.write().await = Some(set);
        Ok(())
    }

    async fn key_for(&self, kid: &str) -> Result<DecodingKey, VerifyError> {
        if let Some(key) = self.cached_key(kid).await? {
            return Ok(key);
        }

        // Unknown kid usually means the provider rotated keys since the
        // last fetch, so refresh once before giving up.
        self.refresh_keys().await?;

        match self.cached_key(kid).await? {
            Some(key) => Ok(key),
            None => {
                warn!(kid, "token signed with unknown key");
                Err(VerifyError::UnknownKey(kid.to_string()))
            }
        }
    }
}

#[async_trait]
impl TokenVerifier for JwksVerifier {
    async fn verify(&self, token: &str) -> Result<AuthUser, VerifyError> {
        let header = decode_header(token)?;
        let Some(kid) = header.kid else {
            return Err(VerifyError::MissingKeyId);
        };

        let key = self.key_for(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.validate_aud = false;

        let data = decode::<Claims>(token, &key, &validation)?;
        Ok(AuthUser {
            user_id: data.claims.sub,
        })
    }
}
