use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_REQUEST_METHOD, AUTHORIZATION, ORIGIN,
};
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use crate::support::auth::bearer;
use crate::support::factory::seed_actor;
use crate::support::{create_test_app, test_state};

const ALLOW_HEADERS: &str = "Content-Type,Authorization,true";
const ALLOW_METHODS: &str = "GET,PATCH,POST,DELETE,OPTIONS";

fn assert_fixed_headers(headers: &actix_web::http::header::HeaderMap, context: &str) {
    assert_eq!(
        headers.get(ACCESS_CONTROL_ALLOW_HEADERS).and_then(|v| v.to_str().ok()),
        Some(ALLOW_HEADERS),
        "{context}"
    );
    assert_eq!(
        headers.get(ACCESS_CONTROL_ALLOW_METHODS).and_then(|v| v.to_str().ok()),
        Some(ALLOW_METHODS),
        "{context}"
    );
}

#[actix_web::test]
async fn fixed_headers_on_success_and_error_responses() {
    let state = test_state().await;
    seed_actor(&state, "Header Check", 50, "male").await;
    let app = create_test_app(state).build().await;

    let ok = test::TestRequest::get()
        .uri("/actors")
        .insert_header((AUTHORIZATION, bearer(&["get:actors"])))
        .to_request();
    let resp = test::call_service(&app, ok).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_fixed_headers(resp.headers(), "200");

    let unauthorized = test::TestRequest::post()
        .uri("/actors")
        .set_json(json!({"name": "n", "age": 1, "gender": "g"}))
        .to_request();
    let resp = test::call_service(&app, unauthorized).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_fixed_headers(resp.headers(), "401");

    let missing = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, missing).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_fixed_headers(resp.headers(), "404");
}

#[actix_web::test]
async fn preflight_is_answered_with_fixed_headers() {
    let app = create_test_app(test_state().await).build().await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/actors")
        .insert_header((ORIGIN, "http://frontend.test"))
        .insert_header((ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success(), "{}", resp.status());
    assert!(resp.headers().contains_key(ACCESS_CONTROL_ALLOW_ORIGIN));
    assert_fixed_headers(resp.headers(), "preflight");
}

#[actix_web::test]
async fn configured_origins_restrict_cors() {
    let app = create_test_app(test_state().await)
        .with_cors_origins(&["https://casting.example.com"])
        .build()
        .await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/actors")
        .insert_header((ORIGIN, "https://casting.example.com"))
        .insert_header((ACCESS_CONTROL_REQUEST_METHOD, "GET"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("https://casting.example.com")
    );
}

#[actix_web::test]
async fn responses_carry_a_request_id() {
    let app = create_test_app(test_state().await).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    let id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header");
    assert!(uuid::Uuid::parse_str(id).is_ok(), "{id}");
}

#[actix_web::test]
async fn caller_request_id_is_echoed() {
    let app = create_test_app(test_state().await).build().await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("x-request-id", "casting-ui-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("casting-ui-42")
    );
}
