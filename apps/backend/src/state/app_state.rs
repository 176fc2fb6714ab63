use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::TokenVerifier;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Token verification settings
    pub security: SecurityConfig,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        security: SecurityConfig,
        verifier: Arc<TokenVerifier>,
    ) -> Self {
        Self {
            db: Some(db),
            security,
            verifier,
        }
    }

    /// State without a database; store-backed handlers answer 503.
    pub fn without_db(security: SecurityConfig, verifier: Arc<TokenVerifier>) -> Self {
        Self {
            db: None,
            security,
            verifier,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
