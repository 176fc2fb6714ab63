use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Actor and movie bodies are a handful of short fields.
const MAX_BODY_BYTES: usize = 16 * 1024;

/// JSON body extractor whose failures become the 400 error envelope.
///
/// Request types use `Option` fields so that a missing field is reported by
/// the handler after authorization, not here.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let path = req.path().to_owned();
        let mut payload = payload.take();

        Box::pin(async move {
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(error = %e, path = %path, "Request body could not be read");
                    AppError::bad_request(ErrorCode::BadRequest, "Request body could not be read")
                })?;
                if body.len() + chunk.len() > MAX_BODY_BYTES {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        format!("Request body exceeds {MAX_BODY_BYTES} bytes"),
                    ));
                }
                body.extend_from_slice(&chunk);
            }

            serde_json::from_slice::<T>(&body)
                .map(ValidatedJson)
                .map_err(|e| {
                    let detail = describe(&e);
                    debug!(path = %path, body_size = body.len(), detail = %detail, "Body rejected");
                    AppError::bad_request(ErrorCode::InvalidJson, detail)
                })
        })
    }
}

/// Position-bearing summary of a decode failure, without echoing body content.
fn describe(e: &serde_json::Error) -> String {
    let what = match e.classify() {
        Category::Syntax => "malformed JSON",
        Category::Eof => "truncated JSON",
        Category::Data => "field has the wrong type",
        Category::Io => "unreadable body",
    };
    format!("Invalid JSON body: {what} at line {} column {}", e.line(), e.column())
}
