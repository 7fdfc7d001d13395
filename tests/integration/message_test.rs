//! Integration tests for direct messaging and conversations.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_send_message_and_read_conversation() {
    let app = helpers::TestApp::new().await;
    let alice_id = app.create_test_user("alice", "Str0ng-Enough-Pw").await;
    let bob_id = app.create_test_user("bob", "Str0ng-Enough-Pw").await;

    let alice_token = app.login("alice", "Str0ng-Enough-Pw").await;
    let bob_token = app.login("bob", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "receiver_id": bob_id,
                "content": "Hi Bob",
            })),
            Some(&alice_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

    // Bob sees an unread message
    let response = app
        .request("GET", "/api/messages/unread-count", None, Some(&bob_token))
        .await;
    assert_eq!(response.body["data"]["count"], 1);

    // Viewing the conversation marks it read
    let response = app
        .request(
            "GET",
            &format!("/api/messages/conversations/{}", alice_id),
            None,
            Some(&bob_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let days = response.body["data"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["messages"].as_array().unwrap().len(), 1);

    let response = app
        .request("GET", "/api/messages/unread-count", None, Some(&bob_token))
        .await;
    assert_eq!(response.body["data"]["count"], 0);
}

#[tokio::test]
async fn test_inbox_lists_conversation_once() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("alice", "Str0ng-Enough-Pw").await;
    let bob_id = app.create_test_user("bob", "Str0ng-Enough-Pw").await;

    let alice_token = app.login("alice", "Str0ng-Enough-Pw").await;

    for content in ["first", "second", "third"] {
        app.request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "receiver_id": bob_id,
                "content": content,
            })),
            Some(&alice_token),
        )
        .await;
    }

    let response = app
        .request("GET", "/api/messages/conversations", None, Some(&alice_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let conversations = response.body["data"].as_array().unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0]["last_content"], "third");
}

#[tokio::test]
async fn test_empty_message_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("alice", "Str0ng-Enough-Pw").await;
    let bob_id = app.create_test_user("bob", "Str0ng-Enough-Pw").await;
    let alice_token = app.login("alice", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "receiver_id": bob_id,
                "content": "   ",
            })),
            Some(&alice_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_message_length_boundary() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("alice", "Str0ng-Enough-Pw").await;
    let bob_id = app.create_test_user("bob", "Str0ng-Enough-Pw").await;
    let alice_token = app.login("alice", "Str0ng-Enough-Pw").await;

    // Exactly at the limit is accepted
    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "receiver_id": bob_id,
                "content": "a".repeat(5000),
            })),
            Some(&alice_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

    // One character over is rejected
    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "receiver_id": bob_id,
                "content": "a".repeat(5001),
            })),
            Some(&alice_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_message_refused_when_recipient_disallows() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("alice", "Str0ng-Enough-Pw").await;
    let bob_id = app.create_test_user("bob", "Str0ng-Enough-Pw").await;

    let alice_token = app.login("alice", "Str0ng-Enough-Pw").await;
    let bob_token = app.login("bob", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "PUT",
            "/api/profiles/me",
            Some(serde_json::json!({ "allow_messages": false })),
            Some(&bob_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "receiver_id": bob_id,
                "content": "Hi Bob",
            })),
            Some(&alice_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_message_to_self_rejected() {
    let app = helpers::TestApp::new().await;
    let alice_id = app.create_test_user("alice", "Str0ng-Enough-Pw").await;
    let alice_token = app.login("alice", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "receiver_id": alice_id,
                "content": "talking to myself",
            })),
            Some(&alice_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
