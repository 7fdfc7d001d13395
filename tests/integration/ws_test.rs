//! Integration tests for the WebSocket endpoint and health probe.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_ws_upgrade_without_token() {
    let app = helpers::TestApp::new().await;

    // Missing token query parameter should be rejected before upgrade
    let response = app.request("GET", "/api/ws", None, None).await;

    assert!(
        response.status == StatusCode::UNAUTHORIZED
            || response.status == StatusCode::BAD_REQUEST
            || response.status == StatusCode::UPGRADE_REQUIRED,
        "Expected 401, 400, or 426, got {}",
        response.status
    );
}

#[tokio::test]
async fn test_ws_upgrade_with_invalid_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/ws?token=not-a-jwt", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_check() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"].as_str().unwrap(), "ok");
    assert_eq!(response.body["database"].as_bool().unwrap(), true);
}
