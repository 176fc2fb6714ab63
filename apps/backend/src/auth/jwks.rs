//! Signing-key sources for token verification.
//!
//! The verifier asks a [`KeySource`] for the decoding key named by the
//! token's `kid`. Production uses [`JwksKeySource`], which downloads the
//! identity provider's JSON Web Key Set and caches it; tests and fixed-key
//! deployments use [`StaticKeySource`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::DecodingKey;
use moka::future::Cache;
use tracing::{debug, warn};

use super::error::AuthError;
use crate::error::AppError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[async_trait]
pub trait KeySource: Send + Sync {
    /// Resolve `kid` to a decoding key, or fail with [`AuthError::UnknownKey`].
    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AuthError>;
}

/// Decoding keys in `set` indexed by `kid`. Keys without a `kid` or with
/// unusable parameters are skipped.
pub fn decoding_keys(set: &JwkSet) -> HashMap<String, DecodingKey> {
    set.keys
        .iter()
        .filter_map(|jwk| {
            let kid = jwk.common.key_id.clone()?;
            match DecodingKey::from_jwk(jwk) {
                Ok(key) => Some((kid, key)),
                Err(e) => {
                    warn!(kid = %kid, error = %e, "Skipping unusable JWK");
                    None
                }
            }
        })
        .collect()
}

/// Fixed set of keys held in memory.
#[derive(Clone, Default)]
pub struct StaticKeySource {
    keys: HashMap<String, DecodingKey>,
}

impl StaticKeySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, kid: impl Into<String>, key: DecodingKey) -> Self {
        self.keys.insert(kid.into(), key);
        self
    }

    pub fn from_jwk_set(set: &JwkSet) -> Self {
        Self {
            keys: decoding_keys(set),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[async_trait]
impl KeySource for StaticKeySource {
    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        self.keys.get(kid).cloned().ok_or(AuthError::UnknownKey)
    }
}

type KeyMap = Arc<HashMap<String, DecodingKey>>;

/// Remote JWKS, fetched lazily and cached for `ttl`.
///
/// Concurrent misses share a single fetch. A `kid` missing from the cached
/// set is rejected until the entry expires.
pub struct JwksKeySource {
    client: reqwest::Client,
    jwks_url: String,
    cache: Cache<String, KeyMap>,
}

impl JwksKeySource {
    pub fn new(jwks_url: impl Into<String>, ttl: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| AppError::config(format!("failed to build JWKS client: {e}")))?;

        Ok(Self {
            client,
            jwks_url: jwks_url.into(),
            cache: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
        })
    }

    async fn fetch(client: reqwest::Client, url: String) -> Result<KeyMap, reqwest::Error> {
        let set = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;
        let keys = decoding_keys(&set);
        debug!(url = %url, keys = keys.len(), "Fetched JWKS");
        Ok(Arc::new(keys))
    }
}

#[async_trait]
impl KeySource for JwksKeySource {
    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        let keys = self
            .cache
            .try_get_with(
                self.jwks_url.clone(),
                Self::fetch(self.client.clone(), self.jwks_url.clone()),
            )
            .await
            .map_err(|e| {
                warn!(url = %self.jwks_url, error = %e, "JWKS fetch failed");
                AuthError::UnknownKey
            })?;

        keys.get(kid).cloned().ok_or(AuthError::UnknownKey)
    }
}
