use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::{JwksKeySource, KeySource, TokenVerifier};
use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

enum DbSource {
    None,
    Profile(DbProfile),
    Connection(DatabaseConnection),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security: SecurityConfig,
    db: DbSource,
    keys: Option<Arc<dyn KeySource>>,
}

impl StateBuilder {
    pub fn new(security: SecurityConfig) -> Self {
        Self {
            security,
            db: DbSource::None,
            keys: None,
        }
    }

    /// Connect via `DATABASE_URL` and migrate during `build`.
    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db = DbSource::Profile(profile);
        self
    }

    /// Use an existing, already-migrated connection.
    pub fn with_connection(mut self, conn: DatabaseConnection) -> Self {
        self.db = DbSource::Connection(conn);
        self
    }

    /// Override the signing-key source. Defaults to the provider's JWKS.
    pub fn with_key_source(mut self, keys: Arc<dyn KeySource>) -> Self {
        self.keys = Some(keys);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let keys: Arc<dyn KeySource> = match self.keys {
            Some(keys) => keys,
            None => Arc::new(JwksKeySource::new(
                self.security.jwks_url(),
                self.security.jwks_cache_ttl,
            )?),
        };
        let verifier = Arc::new(TokenVerifier::new(keys, &self.security));

        match self.db {
            DbSource::None => Ok(AppState::without_db(self.security, verifier)),
            DbSource::Profile(profile) => {
                // single entrypoint: build + migrate
                let conn = bootstrap_db(profile).await?;
                Ok(AppState::new(conn, self.security, verifier))
            }
            DbSource::Connection(conn) => Ok(AppState::new(conn, self.security, verifier)),
        }
    }
}

pub fn build_state(security: SecurityConfig) -> StateBuilder {
    StateBuilder::new(security)
}
