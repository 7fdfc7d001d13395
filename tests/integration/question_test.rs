//! Integration tests for community questions and answers.

mod helpers;

use http::StatusCode;

async fn ask_question(
    app: &helpers::TestApp,
    token: &str,
    title: &str,
    category: &str,
) -> String {
    let response = app
        .request(
            "POST",
            "/api/questions",
            Some(serde_json::json!({
                "title": title,
                "content": "Some longer body text for the question.",
                "category": category,
                "tags": ["tradition"],
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_ask_and_get_question() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("asker", "Str0ng-Enough-Pw").await;
    let token = app.login("asker", "Str0ng-Enough-Pw").await;

    let id = ask_question(&app, &token, "What are typical wedding customs?", "rituals").await;

    let response = app
        .request("GET", &format!("/api/questions/{}", id), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["title"],
        "What are typical wedding customs?"
    );
    // Each fetch counts a view
    assert_eq!(response.body["data"]["views"], 1);
}

#[tokio::test]
async fn test_list_questions_filtered_by_category() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("asker", "Str0ng-Enough-Pw").await;
    let token = app.login("asker", "Str0ng-Enough-Pw").await;

    ask_question(&app, &token, "Question about rituals", "rituals").await;
    ask_question(&app, &token, "Question about food", "food").await;

    let response = app
        .request("GET", "/api/questions?category=food", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["category"], "food");
}

#[tokio::test]
async fn test_answer_bumps_count_and_notifies_author() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("asker", "Str0ng-Enough-Pw").await;
    app.create_test_user("helper", "Str0ng-Enough-Pw").await;
    let asker_token = app.login("asker", "Str0ng-Enough-Pw").await;
    let helper_token = app.login("helper", "Str0ng-Enough-Pw").await;

    let id = ask_question(&app, &asker_token, "Anyone know good venues?", "planning").await;

    let response = app
        .request(
            "POST",
            &format!("/api/questions/{}/answers", id),
            Some(serde_json::json!({ "content": "Try the community hall." })),
            Some(&helper_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

    let response = app
        .request("GET", &format!("/api/questions/{}", id), None, Some(&helper_token))
        .await;
    assert_eq!(response.body["data"]["answers_count"], 1);
    assert_eq!(response.body["data"]["answers"].as_array().unwrap().len(), 1);

    // The question author received a notification
    let response = app
        .request("GET", "/api/notifications", None, Some(&asker_token))
        .await;
    let items = response.body["data"]["items"].as_array().unwrap();
    assert!(items.iter().any(|n| n["kind"] == "answer_posted"));
}

#[tokio::test]
async fn test_only_author_updates_question() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("asker", "Str0ng-Enough-Pw").await;
    app.create_test_user("other", "Str0ng-Enough-Pw").await;
    let asker_token = app.login("asker", "Str0ng-Enough-Pw").await;
    let other_token = app.login("other", "Str0ng-Enough-Pw").await;

    let id = ask_question(&app, &asker_token, "Editable question", "general").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/questions/{}", id),
            Some(serde_json::json!({ "title": "Hijacked" })),
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &format!("/api/questions/{}", id),
            Some(serde_json::json!({ "title": "Edited question" })),
            Some(&asker_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Edited question");
}

#[tokio::test]
async fn test_vote_question() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("asker", "Str0ng-Enough-Pw").await;
    let token = app.login("asker", "Str0ng-Enough-Pw").await;

    let id = ask_question(&app, &token, "Votable question", "general").await;

    let response = app
        .request(
            "POST",
            &format!("/api/questions/{}/vote", id),
            Some(serde_json::json!({ "upvote": true })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["upvotes"], 1);
}
