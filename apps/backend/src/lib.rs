#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;

// Re-exports for public API
pub use auth::{AuthError, Claims, Permission, TokenVerifier};
pub use config::db::DbProfile;
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::{Authorized, ValidatedJson};
pub use infra::db::connect_db;
pub use infra::state::{build_state, StateBuilder};
pub use middleware::{cors_middleware, AccessControlHeaders, RequestTrace, StructuredLogger};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
