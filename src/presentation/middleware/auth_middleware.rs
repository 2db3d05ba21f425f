// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::identity::TokenVerifier;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, warn};

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 令牌验证器
    pub verifier: Arc<dyn TokenVerifier>,
}

/// 认证中间件
///
/// 验证请求中的Bearer令牌，并把已认证用户写入请求扩展。
/// 任何验证失败都以401拒绝，不区分失败原因。
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功的响应
/// * `Err(StatusCode)` - 认证失败的状态码
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Allow public endpoints
    let path = req.uri().path();
    debug!("AuthMiddleware processing path: {}", path);
    if path == "/health" || path == "/v1/version" || path == "/v1/billing/webhook" {
        return Ok(next.run(req).await);
    }

    let token = {
        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let Some(token) = auth_header.strip_prefix("Bearer ") else {
            return Err(StatusCode::UNAUTHORIZED);
        };
        token.to_string()
    };

    match state.verifier.verify(&token).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            counter!("auth_failures_total").increment(1);
            warn!("Token rejected: {}", e);
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
