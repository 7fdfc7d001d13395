//! Integration tests for the notification feed.

mod helpers;

use http::StatusCode;

/// Sends an interest so the receiver gets one stored notification.
async fn seed_notification(app: &helpers::TestApp) -> (String, String) {
    app.create_test_user("sender", "Str0ng-Enough-Pw").await;
    let receiver_id = app.create_test_user("receiver", "Str0ng-Enough-Pw").await;

    let sender_token = app.login("sender", "Str0ng-Enough-Pw").await;
    let receiver_token = app.login("receiver", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/interests",
            Some(serde_json::json!({ "to_user": receiver_id })),
            Some(&sender_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    (sender_token, receiver_token)
}

#[tokio::test]
async fn test_notification_stored_for_interest() {
    let app = helpers::TestApp::new().await;
    let (_, receiver_token) = seed_notification(&app).await;

    let response = app
        .request("GET", "/api/notifications", None, Some(&receiver_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "interest_received");
    assert_eq!(items[0]["is_read"], false);
}

#[tokio::test]
async fn test_mark_read_and_unread_count() {
    let app = helpers::TestApp::new().await;
    let (_, receiver_token) = seed_notification(&app).await;

    let response = app
        .request(
            "GET",
            "/api/notifications/unread-count",
            None,
            Some(&receiver_token),
        )
        .await;
    assert_eq!(response.body["data"]["count"], 1);

    let response = app
        .request("GET", "/api/notifications", None, Some(&receiver_token))
        .await;
    let id = response.body["data"]["items"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{}/read", id),
            None,
            Some(&receiver_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["is_read"], true);

    // Marking twice stays OK
    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{}/read", id),
            None,
            Some(&receiver_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            "/api/notifications/unread-count",
            None,
            Some(&receiver_token),
        )
        .await;
    assert_eq!(response.body["data"]["count"], 0);
}

#[tokio::test]
async fn test_unread_only_filter() {
    let app = helpers::TestApp::new().await;
    let (_, receiver_token) = seed_notification(&app).await;

    let response = app
        .request(
            "PUT",
            "/api/notifications/read-all",
            None,
            Some(&receiver_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["updated"], 1);

    let response = app
        .request(
            "GET",
            "/api/notifications?unread_only=true",
            None,
            Some(&receiver_token),
        )
        .await;
    assert!(response.body["data"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_notification() {
    let app = helpers::TestApp::new().await;
    let (_, receiver_token) = seed_notification(&app).await;

    let response = app
        .request("GET", "/api/notifications", None, Some(&receiver_token))
        .await;
    let id = response.body["data"]["items"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/notifications/{}", id),
            None,
            Some(&receiver_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", "/api/notifications", None, Some(&receiver_token))
        .await;
    assert!(response.body["data"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_users_cannot_read_others_notifications() {
    let app = helpers::TestApp::new().await;
    let (sender_token, receiver_token) = seed_notification(&app).await;

    let response = app
        .request("GET", "/api/notifications", None, Some(&receiver_token))
        .await;
    let id = response.body["data"]["items"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{}/read", id),
            None,
            Some(&sender_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
