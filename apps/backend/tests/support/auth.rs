//! Token minting helpers for tests.
//!
//! Tokens are HS256 with kid [`TEST_KID`], matching the static key source
//! installed by [`super::state::test_state`].

use std::time::{SystemTime, UNIX_EPOCH};

use agency::state::security_config::SecurityConfig;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

pub const TEST_KID: &str = "test-key";
pub const TEST_SECRET: &[u8] = b"integration-test-signing-secret";
pub const TEST_DOMAIN: &str = "casting-agency-test.example.com";
pub const TEST_AUDIENCE: &str = "casting-agency";

/// Permissions of the casting assistant role
pub const ASSISTANT: &[&str] = &["get:actors", "get:movies"];
/// Permissions of the executive producer role
pub const PRODUCER: &[&str] = &[
    "get:actors",
    "get:movies",
    "post:actor",
    "post:movie",
    "patch:actor",
    "patch:movie",
    "delete:actor",
    "delete:movie",
];

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_DOMAIN, TEST_AUDIENCE).with_algorithm(Algorithm::HS256)
}

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs() as i64
}

/// Claims that pass verification, granting `permissions`.
pub fn valid_claims(permissions: &[&str]) -> Value {
    json!({
        "sub": "auth0|integration",
        "iss": test_security().issuer,
        "aud": TEST_AUDIENCE,
        "iat": now(),
        "exp": now() + 3600,
        "permissions": permissions,
    })
}

/// Sign arbitrary claims.
pub fn sign(claims: &Value, kid: Option<&str>, secret: &[u8]) -> String {
    let mut header = Header::new(Algorithm::HS256);
    header.kid = kid.map(str::to_string);
    encode(&header, claims, &EncodingKey::from_secret(secret)).expect("should mint token")
}

pub fn mint_token(permissions: &[&str]) -> String {
    sign(&valid_claims(permissions), Some(TEST_KID), TEST_SECRET)
}

/// Full Authorization header value including the "Bearer " prefix
pub fn bearer(permissions: &[&str]) -> String {
    format!("Bearer {}", mint_token(permissions))
}

pub fn mint_expired_token(permissions: &[&str]) -> String {
    let mut claims = valid_claims(permissions);
    claims["exp"] = json!(now() - 7200);
    sign(&claims, Some(TEST_KID), TEST_SECRET)
}

pub fn mint_wrong_audience_token(permissions: &[&str]) -> String {
    let mut claims = valid_claims(permissions);
    claims["aud"] = json!("another-api");
    sign(&claims, Some(TEST_KID), TEST_SECRET)
}

pub fn mint_wrong_issuer_token(permissions: &[&str]) -> String {
    let mut claims = valid_claims(permissions);
    claims["iss"] = json!("https://impostor.example.com/");
    sign(&claims, Some(TEST_KID), TEST_SECRET)
}

pub fn mint_bad_signature_token(permissions: &[&str]) -> String {
    sign(&valid_claims(permissions), Some(TEST_KID), b"not-the-test-secret")
}

pub fn mint_unknown_kid_token(permissions: &[&str]) -> String {
    sign(&valid_claims(permissions), Some("rotated-key"), TEST_SECRET)
}

pub fn mint_token_without_permissions_claim() -> String {
    let mut claims = valid_claims(&[]);
    claims
        .as_object_mut()
        .expect("claims are an object")
        .remove("permissions");
    sign(&claims, Some(TEST_KID), TEST_SECRET)
}
