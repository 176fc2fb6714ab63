use std::fmt;
use std::sync::Arc;

use actix_web::http::header::HeaderValue;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Validation};

use super::claims::Claims;
use super::error::AuthError;
use super::jwks::KeySource;
use crate::state::security_config::SecurityConfig;

/// Verifies bearer tokens against the configured keys, audience and issuer.
pub struct TokenVerifier {
    keys: Arc<dyn KeySource>,
    validation: Validation,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .field("aud", &self.validation.aud)
            .field("iss", &self.validation.iss)
            .finish_non_exhaustive()
    }
}

impl TokenVerifier {
    pub fn new(keys: Arc<dyn KeySource>, security: &SecurityConfig) -> Self {
        let mut validation = Validation::new(security.algorithm);
        validation.set_audience(&[security.audience.as_str()]);
        validation.set_issuer(&[security.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        Self { keys, validation }
    }

    /// Decode and validate `token`, returning its claims.
    ///
    /// The header's `kid` selects the signing key; tokens without one are
    /// rejected as [`AuthError::UnknownKey`].
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidStructure)?;
        let kid = header.kid.ok_or(AuthError::UnknownKey)?;
        let key = self.keys.decoding_key(&kid).await?;

        decode::<Claims>(token, &key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                ErrorKind::InvalidAudience => AuthError::InvalidAudience,
                ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
                ErrorKind::MissingRequiredClaim(claim) if claim == "aud" => {
                    AuthError::InvalidAudience
                }
                ErrorKind::MissingRequiredClaim(claim) if claim == "iss" => {
                    AuthError::InvalidIssuer
                }
                _ => AuthError::InvalidStructure,
            })
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; anything other than exactly
/// two space-separated parts is malformed.
pub fn extract_bearer(header: Option<&HeaderValue>) -> Result<&str, AuthError> {
    let value = header
        .ok_or(AuthError::MalformedHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None)
            if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() =>
        {
            Ok(token)
        }
        _ => Err(AuthError::MalformedHeader),
    }
}
