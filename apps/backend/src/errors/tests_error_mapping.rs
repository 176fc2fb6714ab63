// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation("bad field");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_not_found() {
    let actor = DomainError::not_found(NotFoundKind::Actor, "no actor");
    let app: AppError = actor.into();
    assert_eq!(app.code().as_str(), "ACTOR_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let movie = DomainError::not_found(NotFoundKind::Movie, "no movie");
    let app: AppError = movie.into();
    assert_eq!(app.code().as_str(), "MOVIE_NOT_FOUND");

    let other = DomainError::not_found(NotFoundKind::Other("Record".into()), "gone");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 500);

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn record_not_found_db_err_becomes_404() {
    let app: AppError = sea_orm::DbErr::RecordNotFound("actors".into()).into();
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn constructor_helpers() {
    let validation = DomainError::validation("invalid input");
    assert!(matches!(validation, DomainError::Validation(_)));

    let not_found = DomainError::not_found(NotFoundKind::Actor, "actor missing");
    assert!(matches!(
        not_found,
        DomainError::NotFound(NotFoundKind::Actor, _)
    ));

    let infra = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    assert!(matches!(
        infra,
        DomainError::Infra(InfraErrorKind::Timeout, _)
    ));
}
