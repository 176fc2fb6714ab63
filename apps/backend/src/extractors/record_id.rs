use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// The `{id}` segment of `/actors/{id}` and `/movies/{id}`.
///
/// Handlers take it as `Result<RecordId, AppError>` behind `Authorized` so a
/// malformed id is only reported once the caller is authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i32);

impl RecordId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromRequest for RecordId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req))
    }
}

fn parse(req: &HttpRequest) -> Result<RecordId, AppError> {
    let raw = req.match_info().get("id").ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidRecordId, "Missing id parameter")
    })?;

    raw.parse::<i32>().map(RecordId).map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidRecordId, format!("Invalid id: {raw}"))
    })
}
