//! Integration tests for the interest request lifecycle.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_send_and_accept_interest() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("sender", "Str0ng-Enough-Pw").await;
    let receiver_id = app.create_test_user("receiver", "Str0ng-Enough-Pw").await;

    let sender_token = app.login("sender", "Str0ng-Enough-Pw").await;
    let receiver_token = app.login("receiver", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/interests",
            Some(serde_json::json!({
                "to_user": receiver_id,
                "message": "Hello!",
            })),
            Some(&sender_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["status"], "pending");
    let interest_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/interests/{}/accept", interest_id),
            None,
            Some(&receiver_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["status"], "accepted");
}

#[tokio::test]
async fn test_decided_interest_is_terminal() {
    let app = helpers::TestApp::new().await;
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
    let interest_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/interests/{}/reject", interest_id),
            None,
            Some(&receiver_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // A second decision on the same interest must not go through
    let response = app
        .request(
            "POST",
            &format!("/api/interests/{}/accept", interest_id),
            None,
            Some(&receiver_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_receiver_can_decide() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("sender", "Str0ng-Enough-Pw").await;
    let receiver_id = app.create_test_user("receiver", "Str0ng-Enough-Pw").await;

    let sender_token = app.login("sender", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/interests",
            Some(serde_json::json!({ "to_user": receiver_id })),
            Some(&sender_token),
        )
        .await;
    let interest_id = response.body["data"]["id"].as_str().unwrap().to_string();

    // The sender cannot decide their own interest
    let response = app
        .request(
            "POST",
            &format!("/api/interests/{}/accept", interest_id),
            None,
            Some(&sender_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN, "{:?}", response.body);

    // Neither can an unrelated third user
    app.create_test_user("bystander", "Str0ng-Enough-Pw").await;
    let bystander_token = app.login("bystander", "Str0ng-Enough-Pw").await;
    let response = app
        .request(
            "POST",
            &format!("/api/interests/{}/reject", interest_id),
            None,
            Some(&bystander_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_interest_refused_when_recipient_disallows() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("sender", "Str0ng-Enough-Pw").await;
    let receiver_id = app.create_test_user("receiver", "Str0ng-Enough-Pw").await;

    let sender_token = app.login("sender", "Str0ng-Enough-Pw").await;
    let receiver_token = app.login("receiver", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "PUT",
            "/api/profiles/me",
            Some(serde_json::json!({ "allow_interests": false })),
            Some(&receiver_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = app
        .request(
            "POST",
            "/api/interests",
            Some(serde_json::json!({ "to_user": receiver_id })),
            Some(&sender_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_duplicate_interest_conflicts() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("sender", "Str0ng-Enough-Pw").await;
    let receiver_id = app.create_test_user("receiver", "Str0ng-Enough-Pw").await;
    let sender_token = app.login("sender", "Str0ng-Enough-Pw").await;

    let body = serde_json::json!({ "to_user": receiver_id });
    let first = app
        .request("POST", "/api/interests", Some(body.clone()), Some(&sender_token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/interests", Some(body), Some(&sender_token))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_self_interest_rejected() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("loner", "Str0ng-Enough-Pw").await;
    let token = app.login("loner", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/interests",
            Some(serde_json::json!({ "to_user": user_id })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_incoming_list_shows_received_interest() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("sender", "Str0ng-Enough-Pw").await;
    let receiver_id = app.create_test_user("receiver", "Str0ng-Enough-Pw").await;

    let sender_token = app.login("sender", "Str0ng-Enough-Pw").await;
    let receiver_token = app.login("receiver", "Str0ng-Enough-Pw").await;

    app.request(
        "POST",
        "/api/interests",
        Some(serde_json::json!({ "to_user": receiver_id })),
        Some(&sender_token),
    )
    .await;

    let response = app
        .request("GET", "/api/interests/incoming", None, Some(&receiver_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["items"].as_array().unwrap().len(), 1);
}
