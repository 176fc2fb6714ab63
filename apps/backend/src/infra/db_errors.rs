//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here, and handlers then map
//! `DomainError` to `AppError` via `From`.

use sea_orm::{ConnAcquireErr, DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// NOT NULL (23502) and CHECK (23514) violations, in Postgres or SQLite wording.
fn is_data_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23502")
        || mentions_sqlstate(msg, "23514")
        || msg.contains("NOT NULL constraint failed")
        || msg.contains("CHECK constraint failed")
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    match &e {
        DbErr::RecordNotFound(what) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                format!("Record not found: {what}"),
            );
        }
        DbErr::RecordNotUpdated => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not updated",
            );
        }
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => {
            warn!(error = %e, "Database pool acquire timed out");
            return DomainError::infra(InfraErrorKind::Timeout, "Database pool acquire timed out");
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            error!(error = %e, "Database connection unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if let Some(sql_err) = e.sql_err() {
        let detail = match sql_err {
            SqlErr::UniqueConstraintViolation(_) => "Unique constraint violated",
            SqlErr::ForeignKeyConstraintViolation(_) => "Foreign key constraint violated",
            _ => "Constraint violated",
        };
        warn!(error = %e, "Constraint violation");
        return DomainError::validation(detail);
    }

    let error_msg = e.to_string();
    if is_data_violation(&error_msg) {
        warn!(error = %error_msg, "Data rejected by the store");
        return DomainError::validation("Data rejected by the store");
    }

    error!(error = %error_msg, "Unhandled database error");
    DomainError::infra(InfraErrorKind::Other("Db".into()), "Database operation failed")
}
