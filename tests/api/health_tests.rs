//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{read_json, TestApp};

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
}

/// Test health check returns JSON with status field
#[tokio::test]
async fn test_health_check_returns_json() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;
    let json = read_json(response).await;

    assert_eq!(json["status"], "healthy");
    assert!(json.get("version").is_some());
}
