//! Error codes for the casting agency API.
//!
//! Every failure carries one of these codes. The code is written to the
//! logs next to the internal detail; clients only ever see the public
//! error envelope. Add new codes here; never pass ad-hoc strings.

use core::fmt;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authorization header missing or not a bearer token
    MalformedAuthHeader,
    /// Token could not be decoded
    InvalidTokenStructure,
    /// Token `kid` absent or not published by the key source
    UnknownSigningKey,
    /// Token has expired
    ExpiredToken,
    /// Token signature does not verify
    InvalidSignature,
    /// Token audience is not ours
    InvalidAudience,
    /// Token issuer is not ours
    InvalidIssuer,
    /// Token has no permissions claim
    MissingPermissionsClaim,
    /// Required permission not granted
    PermissionDenied,

    // Request Validation
    /// General bad request error
    BadRequest,
    /// Request body is not valid JSON for the expected shape
    InvalidJson,
    /// A required field is absent
    MissingField,
    /// Path id is not an integer
    InvalidRecordId,
    /// Store rejected the data (constraint violation)
    ValidationError,

    // Resource Not Found
    /// Actor id does not exist
    ActorNotFound,
    /// Movie id does not exist
    MovieNotFound,
    /// Actor collection is empty
    NoActors,
    /// Movie collection is empty
    NoMovies,
    /// Route or generic record not found
    NotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Authentication & Authorization
            Self::MalformedAuthHeader => "MALFORMED_AUTH_HEADER",
            Self::InvalidTokenStructure => "INVALID_TOKEN_STRUCTURE",
            Self::UnknownSigningKey => "UNKNOWN_SIGNING_KEY",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::InvalidAudience => "INVALID_AUDIENCE",
            Self::InvalidIssuer => "INVALID_ISSUER",
            Self::MissingPermissionsClaim => "MISSING_PERMISSIONS_CLAIM",
            Self::PermissionDenied => "PERMISSION_DENIED",

            // Request Validation
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidJson => "INVALID_JSON",
            Self::MissingField => "MISSING_FIELD",
            Self::InvalidRecordId => "INVALID_RECORD_ID",
            Self::ValidationError => "VALIDATION_ERROR",

            // Resource Not Found
            Self::ActorNotFound => "ACTOR_NOT_FOUND",
            Self::MovieNotFound => "MOVIE_NOT_FOUND",
            Self::NoActors => "NO_ACTORS",
            Self::NoMovies => "NO_MOVIES",
            Self::NotFound => "NOT_FOUND",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
