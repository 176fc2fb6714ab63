//! Repository functions for the domain layer (generic over ConnectionTrait).

pub mod actors;
pub mod movies;
