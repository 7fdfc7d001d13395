//! Integration tests for profiles and profile views.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_get_and_update_own_profile() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("priya", "Str0ng-Enough-Pw").await;
    let token = app.login("priya", "Str0ng-Enough-Pw").await;

    let response = app.request("GET", "/api/profiles/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "priya");

    let response = app
        .request(
            "PUT",
            "/api/profiles/me",
            Some(serde_json::json!({
                "location": "Chennai",
                "occupation": "Engineer",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["location"], "Chennai");
    assert_eq!(response.body["data"]["occupation"], "Engineer");
}

#[tokio::test]
async fn test_view_records_profile_view_once_per_day() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("viewer", "Str0ng-Enough-Pw").await;
    let viewed_id = app.create_test_user("viewed", "Str0ng-Enough-Pw").await;

    let viewer_token = app.login("viewer", "Str0ng-Enough-Pw").await;
    let viewed_token = app.login("viewed", "Str0ng-Enough-Pw").await;

    for _ in 0..3 {
        let response = app
            .request(
                "GET",
                &format!("/api/profiles/{}", viewed_id),
                None,
                Some(&viewer_token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    // Repeat views on the same day produce a single notification
    let response = app
        .request("GET", "/api/notifications", None, Some(&viewed_token))
        .await;
    let items = response.body["data"]["items"].as_array().unwrap();
    let views = items
        .iter()
        .filter(|n| n["kind"] == "profile_viewed")
        .count();
    assert_eq!(views, 1);
}

#[tokio::test]
async fn test_browse_excludes_deactivated() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("active_user", "Str0ng-Enough-Pw").await;
    app.create_test_user("leaving_user", "Str0ng-Enough-Pw").await;

    let active_token = app.login("active_user", "Str0ng-Enough-Pw").await;
    let leaving_token = app.login("leaving_user", "Str0ng-Enough-Pw").await;

    let response = app
        .request("DELETE", "/api/profiles/me", None, Some(&leaving_token))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", "/api/profiles/", None, Some(&active_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["username"], "active_user");
}

#[tokio::test]
async fn test_view_missing_profile_is_404() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("viewer", "Str0ng-Enough-Pw").await;
    let token = app.login("viewer", "Str0ng-Enough-Pw").await;

    let response = app
        .request(
            "GET",
            &format!("/api/profiles/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
