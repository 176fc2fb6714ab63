use std::future::{ready, Ready};
use std::time::{Duration, Instant};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{Method, StatusCode};
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::error::AppError;

/// One `request completed` line per request, levelled by status class.
///
/// Failed requests also carry the `AppError` code, so a 401 in the access
/// log can be told apart as an expired token or a missing permission.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let completion = match &result {
                Ok(res) => Completion {
                    status: res.status(),
                    code: res.response().error().and_then(app_error_code),
                },
                Err(err) => Completion {
                    status: err.as_response_error().status_code(),
                    code: app_error_code(err),
                },
            };
            completion.log(&method, &path, started.elapsed());

            result
        })
    }
}

struct Completion {
    status: StatusCode,
    code: Option<&'static str>,
}

impl Completion {
    fn log(&self, method: &Method, path: &str, elapsed: Duration) {
        let status = self.status.as_u16();
        let code = self.code.unwrap_or("-");
        let duration_us = elapsed.as_micros() as u64;

        if self.status.is_server_error() {
            error!(%method, path, status, code, duration_us, "request completed");
        } else if self.status.is_client_error() {
            warn!(%method, path, status, code, duration_us, "request completed");
        } else {
            info!(%method, path, status, duration_us, "request completed");
        }
    }
}

fn app_error_code(err: &ActixError) -> Option<&'static str> {
    err.as_error::<AppError>().map(|e| e.code().as_str())
}
