use std::sync::Arc;

use agency::auth::{AuthError, KeySource, StaticKeySource};
use agency::infra::db::{connect_url, migrate_up};
use agency::infra::state::build_state;
use agency::state::app_state::AppState;
use async_trait::async_trait;
use jsonwebtoken::DecodingKey;

use super::auth::{test_security, TEST_KID, TEST_SECRET};

fn test_keys() -> Arc<StaticKeySource> {
    Arc::new(StaticKeySource::new().with_key(TEST_KID, DecodingKey::from_secret(TEST_SECRET)))
}

/// Static keys that make the caller wait one scheduler turn, the way a
/// JWKS lookup does on a cold cache.
struct DeferredKeys(Arc<StaticKeySource>);

#[async_trait]
impl KeySource for DeferredKeys {
    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        tokio::task::yield_now().await;
        self.0.decoding_key(kid).await
    }
}

async fn migrated_state(keys: Arc<dyn KeySource>) -> AppState {
    let conn = connect_url("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    migrate_up(&conn).await.expect("apply migrations");

    build_state(test_security())
        .with_connection(conn)
        .with_key_source(keys)
        .build()
        .await
        .expect("build test state")
}

/// State over a fresh, migrated in-memory SQLite database.
pub async fn test_state() -> AppState {
    migrated_state(test_keys()).await
}

/// Like [`test_state`], but key resolution does not complete on first poll.
pub async fn test_state_with_deferred_keys() -> AppState {
    migrated_state(Arc::new(DeferredKeys(test_keys()))).await
}

/// State with no database; store-backed handlers answer 503.
pub async fn test_state_without_db() -> AppState {
    build_state(test_security())
        .with_key_source(test_keys())
        .build()
        .await
        .expect("build test state")
}
