pub mod auth;
pub mod db;
pub mod server;

use std::env;

use crate::error::AppError;

/// Required environment variable, or a config error naming it.
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

/// Optional environment variable; empty values count as unset.
pub(crate) fn opt_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
