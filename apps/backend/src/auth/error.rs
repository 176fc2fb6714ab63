use thiserror::Error;

use super::permissions::Permission;
use crate::errors::ErrorCode;

/// Every way a request can fail authentication or authorization.
///
/// All variants surface to the client as the same 401 envelope; the
/// variant itself is only visible in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authorization header missing or not a bearer token")]
    MalformedHeader,
    #[error("token could not be decoded")]
    InvalidStructure,
    #[error("no signing key matches the token")]
    UnknownKey,
    #[error("token expired")]
    ExpiredToken,
    #[error("token signature invalid")]
    InvalidSignature,
    #[error("token audience not accepted")]
    InvalidAudience,
    #[error("token issuer not accepted")]
    InvalidIssuer,
    #[error("token carries no permissions claim")]
    MissingPermissionsClaim,
    #[error("permission {0} not granted")]
    PermissionDenied(Permission),
}

impl AuthError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedHeader => ErrorCode::MalformedAuthHeader,
            Self::InvalidStructure => ErrorCode::InvalidTokenStructure,
            Self::UnknownKey => ErrorCode::UnknownSigningKey,
            Self::ExpiredToken => ErrorCode::ExpiredToken,
            Self::InvalidSignature => ErrorCode::InvalidSignature,
            Self::InvalidAudience => ErrorCode::InvalidAudience,
            Self::InvalidIssuer => ErrorCode::InvalidIssuer,
            Self::MissingPermissionsClaim => ErrorCode::MissingPermissionsClaim,
            Self::PermissionDenied(_) => ErrorCode::PermissionDenied,
        }
    }
}
