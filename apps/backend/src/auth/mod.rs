//! Bearer-token authentication and permission enforcement.

pub mod claims;
pub mod error;
pub mod guard;
pub mod jwks;
pub mod jwt;
pub mod permissions;

pub use claims::{Audience, Claims};
pub use error::AuthError;
pub use guard::require_permission;
pub use jwks::{JwksKeySource, KeySource, StaticKeySource};
pub use jwt::{extract_bearer, TokenVerifier};
pub use permissions::{authorize, scope, Permission, Scope};
