//! Error envelope test helpers
//!
//! Assertions for the `{success, error, message}` error contract that do not
//! depend on backend types.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Local mirror of the backend's error envelope.
#[derive(Debug, Deserialize, Serialize)]
struct ErrorEnvelopeLike {
    success: bool,
    error: u16,
    message: String,
}

/// Assert that raw response parts conform to the error envelope contract:
/// - HTTP status matches expected
/// - body is exactly `{success: false, error: <status>, message: <expected>}`
pub fn assert_error_envelope_from_parts(
    status: StatusCode,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(status, expected_status);

    let body_str =
        std::str::from_utf8(body_bytes).expect("Response body should be valid UTF-8");
    let envelope: ErrorEnvelopeLike = serde_json::from_str(body_str)
        .unwrap_or_else(|e| panic!("Response body should be an error envelope ({e}): {body_str}"));

    assert!(!envelope.success, "error envelope must carry success=false");
    assert_eq!(envelope.error, expected_status.as_u16());
    assert_eq!(envelope.message, expected_message);

    // No extra fields leak into the contract
    let raw: serde_json::Value = serde_json::from_str(body_str).expect("valid JSON");
    let keys = raw.as_object().map(|o| o.len()).unwrap_or_default();
    assert_eq!(keys, 3, "error envelope must have exactly three fields: {body_str}");
}

/// Assert that a ServiceResponse conforms to the error envelope contract.
pub async fn assert_error_envelope_from_service_response<B>(
    resp: actix_web::dev::ServiceResponse<B>,
    expected_status: StatusCode,
    expected_message: &str,
) where
    B: actix_web::body::MessageBody,
{
    let status = resp.status();
    let body = actix_web::test::read_body(resp).await;
    assert_error_envelope_from_parts(status, &body, expected_status, expected_message);
}
