use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod actors;
pub mod health;
pub mod movies;

/// Register every route.
///
/// `main.rs` adds middleware and the not-found fallback around this; tests
/// call it directly on a bare `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/actors").configure(actors::configure_routes));
    cfg.service(web::scope("/movies").configure(movies::configure_routes));
}

/// Fallback for unmatched paths, rendered as the 404 envelope.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("no route for {}", req.path()),
    ))
}

/// Unwrap a required request field or fail with 400.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, AppError> {
    value.ok_or_else(|| {
        AppError::bad_request(ErrorCode::MissingField, format!("missing field '{field}'"))
    })
}
