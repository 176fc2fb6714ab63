use std::time::Duration;

use super::{must_var, opt_var};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

const DEFAULT_JWKS_TTL_SECS: u64 = 600;

/// Build the token-verification settings from the environment.
///
/// `AUTH0_DOMAIN` and `API_AUDIENCE` are required. `AUTH0_ISSUER` defaults to
/// `https://<domain>/`; `JWKS_CACHE_TTL_SECS` defaults to ten minutes.
pub fn security_from_env() -> Result<SecurityConfig, AppError> {
    let domain = must_var("AUTH0_DOMAIN")?;
    let audience = must_var("API_AUDIENCE")?;

    let mut security = SecurityConfig::new(domain, audience);

    if let Some(issuer) = opt_var("AUTH0_ISSUER") {
        security = security.with_issuer(issuer);
    }

    let ttl = match opt_var("JWKS_CACHE_TTL_SECS") {
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            AppError::config(format!(
                "JWKS_CACHE_TTL_SECS must be a number of seconds, got '{raw}'"
            ))
        })?,
        None => DEFAULT_JWKS_TTL_SECS,
    };

    Ok(security.with_jwks_cache_ttl(Duration::from_secs(ttl)))
}
