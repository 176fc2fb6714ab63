//! Permission vocabulary and the enforcement gate.
//!
//! Permissions are `action:resource` strings granted by the identity
//! provider in the token's `permissions` claim. The vocabulary is closed:
//! each gated operation names exactly one of the constants below and the
//! check is an exact set-membership test.

use std::fmt;

use super::claims::Claims;
use super::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    GetActors,
    GetMovies,
    PostActor,
    PostMovie,
    PatchActor,
    PatchMovie,
    DeleteActor,
    DeleteMovie,
}

impl Permission {
    pub const ALL: [Permission; 8] = [
        Permission::GetActors,
        Permission::GetMovies,
        Permission::PostActor,
        Permission::PostMovie,
        Permission::PatchActor,
        Permission::PatchMovie,
        Permission::DeleteActor,
        Permission::DeleteMovie,
    ];

    /// The exact string the identity provider puts in the claim.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GetActors => "get:actors",
            Self::GetMovies => "get:movies",
            Self::PostActor => "post:actor",
            Self::PostMovie => "post:movie",
            Self::PatchActor => "patch:actor",
            Self::PatchMovie => "patch:movie",
            Self::DeleteActor => "delete:actor",
            Self::DeleteMovie => "delete:movie",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allow or deny `required` for an already-verified claim set.
///
/// A token without a `permissions` claim is rejected with
/// [`AuthError::MissingPermissionsClaim`]; an empty list is a valid claim
/// that simply grants nothing.
pub fn authorize(claims: &Claims, required: Permission) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::MissingPermissionsClaim)?;

    if granted.contains(required.as_str()) {
        Ok(())
    } else {
        Err(AuthError::PermissionDenied(required))
    }
}

/// Compile-time binding of a handler to the permission it requires.
pub trait Scope: 'static {
    const PERMISSION: Permission;
}

macro_rules! scopes {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $name;

            impl Scope for $name {
                const PERMISSION: Permission = Permission::$name;
            }
        )*
    };
}

/// One marker type per permission, used as `Authorized<scope::PostActor>`.
pub mod scope {
    use super::{Permission, Scope};

    scopes!(
        GetActors,
        GetMovies,
        PostActor,
        PostMovie,
        PatchActor,
        PatchMovie,
        DeleteActor,
        DeleteMovie,
    );
}
