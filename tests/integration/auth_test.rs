//! Integration tests for registration and authentication.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_register_success() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "anita_k",
                "email": "anita@example.com",
                "password": "correct horse battery",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert!(response.body["data"]["access_token"].is_string());
    assert!(response.body["data"]["refresh_token"].is_string());
    assert_eq!(response.body["data"]["user"]["username"], "anita_k");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("taken", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "taken",
                "email": "other@example.com",
                "password": "correct horse battery",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_weak_password() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "weakpw",
                "email": "weak@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("testuser", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "testuser",
                "password": "Str0ng-Enough-Pw",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
    assert!(response.body["data"]["refresh_token"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("testuser2", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "testuser2",
                "password": "wrong-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_flow() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("refresher", "Str0ng-Enough-Pw").await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "refresher",
                "password": "Str0ng-Enough-Pw",
            })),
            None,
        )
        .await;
    let refresh_token = login.body["data"]["refresh_token"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("refresher2", "Str0ng-Enough-Pw").await;
    let access = app.login("refresher2", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": access })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/profiles/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
