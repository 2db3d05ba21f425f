// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// 账单Webhook请求的签名头名称
pub const SIGNATURE_HEADER: &str = "Billing-Signature";

/// 签名验证错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Malformed signature header")]
    MalformedHeader,
    #[error("Signature does not match payload")]
    Mismatch,
    #[error("Timestamp outside tolerance window")]
    StaleTimestamp,
}

/// 为负载生成签名
///
/// 消息为 `{timestamp}.{payload}`，HMAC-SHA256后十六进制编码。
/// 发送方与测试用它构造 `t=<ts>,v1=<hex>` 形式的签名头。
pub fn sign(secret: &str, timestamp: i64, payload: &str) -> String {
    let message = format!("{}.{}", timestamp, payload);
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// 账单Webhook签名验证器
///
/// 账单提供商对原始请求体签名；验证通过前不得解析事件内容。
pub struct BillingWebhookVerifier {
    secret: String,
    tolerance_secs: i64,
}

impl BillingWebhookVerifier {
    pub fn new(secret: String, tolerance_secs: i64) -> Self {
        Self {
            secret,
            tolerance_secs,
        }
    }

    /// 验证签名头与原始负载
    ///
    /// `header` 形如 `t=<unix_ts>,v1=<hex hmac>`。签名按常量时间比较，
    /// 时间戳偏差超过容忍窗口的事件被拒绝。
    pub fn verify(&self, header: &str, payload: &str, now: i64) -> Result<(), SignatureError> {
        let Some((timestamp, signature)) = parse_header(header) else {
            return Err(SignatureError::MalformedHeader);
        };

        let sig_bytes = hex::decode(&signature).map_err(|_| SignatureError::MalformedHeader)?;

        let message = format!("{}.{}", timestamp, payload);
        let mut mac =
            HmacSha256::new_from_slice(self.secret.as_bytes()).expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        mac.verify_slice(&sig_bytes)
            .map_err(|_| SignatureError::Mismatch)?;

        // Freshness is checked only for correctly signed events.
        if (now - timestamp).abs() > self.tolerance_secs {
            return Err(SignatureError::StaleTimestamp);
        }

        Ok(())
    }
}

fn parse_header(header: &str) -> Option<(i64, String)> {
    let mut timestamp = None;
    let mut signature = None;

    for part in header.split(',') {
        let (key, value) = part.trim().split_once('=')?;
        match key {
            "t" => timestamp = value.parse().ok(),
            "v1" => signature = Some(value.to_string()),
            _ => {}
        }
    }

    Some((timestamp?, signature?))
}
