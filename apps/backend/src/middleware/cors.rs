use actix_cors::Cors;
use actix_web::http::header;

use super::request_trace::REQUEST_ID_HEADER;

/// Build CORS middleware.
///
/// With no configured origins any origin is accepted; otherwise only the
/// listed ones are. Origins arrive already validated by `ServerConfig`.
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        // Methods actually used by the API
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(3600);

    if origins.is_empty() {
        cors = cors.allow_any_origin();
    } else {
        for origin in origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
