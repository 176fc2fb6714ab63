use actix_web::http::header::HeaderValue;
use tracing::debug;

use super::claims::Claims;
use super::error::AuthError;
use super::jwt::{extract_bearer, TokenVerifier};
use super::permissions::{authorize, Permission};

/// Header extraction, token verification and the permission check, in that
/// order. The first failure wins.
pub async fn require_permission(
    verifier: &TokenVerifier,
    header: Option<&HeaderValue>,
    required: Permission,
) -> Result<Claims, AuthError> {
    let token = extract_bearer(header)?;
    let claims = verifier.verify(token).await?;
    authorize(&claims, required)?;

    debug!(sub = ?claims.sub, permission = %required, "Permission granted");
    Ok(claims)
}
