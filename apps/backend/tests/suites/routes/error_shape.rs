use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use agency::{AppError, AuthError, ErrorCode};
use backend_test_support::envelope::assert_error_envelope_from_service_response;

use crate::support::auth::bearer;
use crate::support::{create_test_app, test_state, test_state_without_db};

async fn unauthorized() -> Result<HttpResponse, AppError> {
    Err(AuthError::InvalidSignature.into())
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::ActorNotFound, "Actor 9 not found"))
}

async fn bad_request() -> Result<HttpResponse, AppError> {
    Err(AppError::bad_request(ErrorCode::MissingField, "missing field 'title'"))
}

async fn unprocessable() -> Result<HttpResponse, AppError> {
    Err(AppError::unprocessable(ErrorCode::ValidationError, "CHECK constraint failed: age"))
}

async fn db_error() -> Result<HttpResponse, AppError> {
    Err(AppError::db("connection reset by peer"))
}

async fn db_unavailable() -> Result<HttpResponse, AppError> {
    Err(AppError::db_unavailable())
}

// handler-only: validates error shape; no DB
#[actix_web::test]
async fn every_failure_kind_renders_the_envelope() {
    let app = create_test_app(test_state_without_db().await)
        .with_routes(|cfg| {
            cfg.route("/unauthorized", web::get().to(unauthorized))
                .route("/not_found", web::get().to(not_found))
                .route("/bad_request", web::get().to(bad_request))
                .route("/unprocessable", web::get().to(unprocessable))
                .route("/db_error", web::get().to(db_error))
                .route("/db_unavailable", web::get().to(db_unavailable));
        })
        .build()
        .await;

    let cases = [
        ("/unauthorized", StatusCode::UNAUTHORIZED, "unauthorized access"),
        ("/not_found", StatusCode::NOT_FOUND, "resource not found"),
        ("/bad_request", StatusCode::BAD_REQUEST, "bad request"),
        ("/unprocessable", StatusCode::UNPROCESSABLE_ENTITY, "unprocessable request"),
        ("/db_error", StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        ("/db_unavailable", StatusCode::SERVICE_UNAVAILABLE, "service unavailable"),
    ];

    for (uri, status, message) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_envelope_from_service_response(resp, status, message).await;
    }
}

#[actix_web::test]
async fn unknown_route_is_404_envelope() {
    let app = create_test_app(test_state().await).build().await;

    let req = test::TestRequest::get().uri("/directors").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_envelope_from_service_response(resp, StatusCode::NOT_FOUND, "resource not found")
        .await;
}

#[actix_web::test]
async fn authorized_request_without_database_is_503() {
    let app = create_test_app(test_state_without_db().await).build().await;

    let req = test::TestRequest::get()
        .uri("/actors")
        .insert_header((AUTHORIZATION, bearer(&["get:actors"])))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_envelope_from_service_response(
        resp,
        StatusCode::SERVICE_UNAVAILABLE,
        "service unavailable",
    )
    .await;
}

#[actix_web::test]
async fn internal_detail_never_reaches_the_client() {
    let app = create_test_app(test_state_without_db().await)
        .with_routes(|cfg| {
            cfg.route("/db_error", web::get().to(db_error));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/db_error").to_request();
    let body = test::read_body(test::call_service(&app, req).await).await;
    let text = std::str::from_utf8(&body).expect("utf-8 body");
    assert!(!text.contains("connection reset"), "{text}");
    assert!(!text.contains("DB_ERROR"), "{text}");
}
