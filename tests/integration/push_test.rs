//! Integration tests for push subscription management.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_subscribe_and_list() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("pushuser", "Str0ng-Enough-Pw").await;
    let token = app.login("pushuser", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/push/subscribe",
            Some(serde_json::json!({
                "endpoint": "https://push.example.com/send/abc123",
                "keys": { "p256dh": "BKey", "auth": "secret" },
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

    let response = app
        .request("GET", "/api/push/subscriptions", None, Some(&token))
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_subscribe_same_endpoint_upserts() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("pushuser", "Str0ng-Enough-Pw").await;
    let token = app.login("pushuser", "Str0ng-Enough-Pw").await;

    for auth in ["first", "second"] {
        let response = app
            .request(
                "POST",
                "/api/push/subscribe",
                Some(serde_json::json!({
                    "endpoint": "https://push.example.com/send/abc123",
                    "keys": { "p256dh": "BKey", "auth": auth },
                })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request("GET", "/api/push/subscriptions", None, Some(&token))
        .await;
    let items = response.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["key_auth"], "second");
}

#[tokio::test]
async fn test_non_https_endpoint_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("pushuser", "Str0ng-Enough-Pw").await;
    let token = app.login("pushuser", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/push/subscribe",
            Some(serde_json::json!({
                "endpoint": "http://insecure.example.com/send/abc",
                "keys": { "p256dh": "BKey", "auth": "secret" },
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsubscribe() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("pushuser", "Str0ng-Enough-Pw").await;
    let token = app.login("pushuser", "Str0ng-Enough-Pw").await;

    app.request(
        "POST",
        "/api/push/subscribe",
        Some(serde_json::json!({
            "endpoint": "https://push.example.com/send/abc123",
            "keys": { "p256dh": "BKey", "auth": "secret" },
        })),
        Some(&token),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/push/unsubscribe",
            Some(serde_json::json!({
                "endpoint": "https://push.example.com/send/abc123",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", "/api/push/subscriptions", None, Some(&token))
        .await;
    assert!(response.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_vapid_key_disabled_by_default() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("pushuser", "Str0ng-Enough-Pw").await;
    let token = app.login("pushuser", "Str0ng-Enough-Pw").await;

    let response = app
        .request("GET", "/api/push/vapid-key", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["enabled"], false);
}
