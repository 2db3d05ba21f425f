// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use sitepulse::config::settings::IdentitySettings;
use sitepulse::infrastructure::identity::{JwksVerifier, TokenVerifier, VerifyError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ISSUER: &str = "https://issuer.test/";

/// RFC 7517附录A的RSA公钥，kid固定为k1
fn rsa_jwks() -> serde_json::Value {
    serde_json::json!({
        "keys": [{
            "kty": "RSA",
            "use": "sig",
            "alg": "RS256",
            "kid": "k1",
            "n": "0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw",
            "e": "AQAB"
        }]
    })
}

fn hs256_token(kid: Option<&str>) -> String {
    let mut header = Header::new(Algorithm::HS256);
    header.kid = kid.map(str::to_string);

    let claims = serde_json::json!({
        "sub": "alice",
        "iss": ISSUER,
        "exp": Utc::now().timestamp() + 600
    });

    jsonwebtoken::encode(&header, &claims, &EncodingKey::from_secret(b"forged"))
        .expect("token encodes")
}

async fn verifier_against(server: &MockServer) -> JwksVerifier {
    JwksVerifier::new(&IdentitySettings {
        jwks_url: format!("{}/.well-known/jwks.json", server.uri()),
        issuer: ISSUER.to_string(),
    })
}

#[tokio::test]
async fn test_unknown_kid_triggers_one_refresh_then_rejects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/jwks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rsa_jwks()))
        .expect(1)
        .mount(&server)
        .await;

    let verifier = verifier_against(&server).await;
    let result = verifier.verify(&hs256_token(Some("rotated-away"))).await;

    assert!(matches!(result, Err(VerifyError::UnknownKey(kid)) if kid == "rotated-away"));
}

#[tokio::test]
async fn test_token_without_kid_is_rejected_without_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/jwks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rsa_jwks()))
        .expect(0)
        .mount(&server)
        .await;

    let verifier = verifier_against(&server).await;
    let result = verifier.verify(&hs256_token(None)).await;

    assert!(matches!(result, Err(VerifyError::MissingKeyId)));
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let server = MockServer::start().await;
    let verifier = verifier_against(&server).await;

    let result = verifier.verify("not-a-jwt-at-all").await;
    assert!(matches!(result, Err(VerifyError::Rejected(_))));
}

#[tokio::test]
async fn test_token_signed_with_wrong_algorithm_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/jwks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rsa_jwks()))
        .mount(&server)
        .await;

    let verifier = verifier_against(&server).await;

    // The kid matches a published key; the HMAC signature must still fail
    // RS256 validation.
    let result = verifier.verify(&hs256_token(Some("k1"))).await;
    assert!(matches!(result, Err(VerifyError::Rejected(_))));
}

#[tokio::test]
async fn test_key_set_fetch_failure_surfaces() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/jwks.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let verifier = verifier_against(&server).await;
    let result = verifier.verify(&hs256_token(Some("k1"))).await;

    assert!(matches!(result, Err(VerifyError::KeySetFetch(_))));
}
