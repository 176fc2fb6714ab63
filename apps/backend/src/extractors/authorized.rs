use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};
use tracing::warn;

use crate::auth::{require_permission, Claims, Scope};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Proof that the caller holds `S::PERMISSION`.
///
/// Taking `Authorized<scope::PostActor>` as a handler argument makes the
/// handler unreachable without a verified token granting `post:actor`.
#[derive(Debug)]
pub struct Authorized<S: Scope> {
    claims: Claims,
    _scope: PhantomData<S>,
}

impl<S: Scope> Authorized<S> {
    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}

impl<S: Scope> FromRequest for Authorized<S> {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let header = req.headers().get(AUTHORIZATION);
            match require_permission(&state.verifier, header, S::PERMISSION).await {
                Ok(claims) => Ok(Authorized {
                    claims,
                    _scope: PhantomData,
                }),
                Err(e) => {
                    warn!(
                        reason = %e,
                        code = %e.code(),
                        permission = %S::PERMISSION,
                        path = %req.path(),
                        "Request not authorized"
                    );
                    Err(AppError::from(e))
                }
            }
        })
    }
}
