//! OSA Submission API Tests
//!
//! Validation failures must leave no trace: no rows, no mail. The
//! persistence-failure path is exercised via the unreachable test pool.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{read_json, TestApp};

/// Missing required field rejects the whole submission with 400
#[tokio::test]
async fn test_submit_with_missing_last_name_fails() {
    let app = TestApp::new().await;
    let body = json!({
        "guests": [
            { "name": "A", "lastName": "B", "email": "a@b.com" },
            { "name": "C", "email": "c@d.com" }
        ]
    });

    let response = app.post_json("/api/submit", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    // No side effects on validation failure
    assert!(app.notifier.sent_to.lock().unwrap().is_empty());
}

/// Invalid email yields a field-level error list and no side effects
#[tokio::test]
async fn test_submit_with_invalid_email_fails() {
    let app = TestApp::new().await;
    let body = json!({
        "guests": [
            { "name": "A", "lastName": "B", "email": "not-an-email" }
        ]
    });

    let response = app.post_json("/api/submit", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    let errors = json["errors"].as_array().expect("field error list");
    assert!(!errors.is_empty());
    assert!(app.notifier.sent_to.lock().unwrap().is_empty());
}

/// Empty guest list is rejected
#[tokio::test]
async fn test_submit_with_empty_guest_list_fails() {
    let app = TestApp::new().await;
    let body = json!({ "guests": [] });

    let response = app.post_json("/api/submit", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A non-boolean attendance flag is a malformed body, not a 422
#[tokio::test]
async fn test_submit_with_non_boolean_flag_fails_as_bad_request() {
    let app = TestApp::new().await;
    let body = json!({
        "guests": [
            { "name": "A", "lastName": "B", "email": "a@b.com", "attendingWedding": "Självklart" }
        ]
    });

    let response = app.post_json("/api/submit", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A persistence failure surfaces as 500 with the fixed message,
/// while the confirmation mail was still attempted per guest
#[tokio::test]
async fn test_submit_with_unreachable_database_returns_500() {
    let app = TestApp::new().await;
    let body = json!({
        "guests": [
            { "name": "A", "lastName": "B", "email": "a@b.com" },
            { "name": "C", "lastName": "D", "email": "c@d.com" }
        ]
    });

    let response = app.post_json("/api/submit", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = read_json(response).await;
    assert_eq!(json["message"], "Internal server error");
    // Notification dispatch is independent of the persistence outcome
    assert_eq!(app.notifier.sent_to.lock().unwrap().len(), 2);
}
