//! Request body DTOs.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use sangam_service::account::RegisterAccount;

/// Body for `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Gender.
    pub gender: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
}

impl From<RegisterRequest> for RegisterAccount {
    fn from(req: RegisterRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            display_name: req.display_name,
            gender: req.gender,
            date_of_birth: req.date_of_birth,
        }
    }
}

/// Body for `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Body for `POST /api/auth/refresh`.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    /// A previously issued refresh token.
    pub refresh_token: String,
}

/// Body for `POST /api/auth/change-password`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// The current password.
    pub current_password: String,
    /// The replacement password.
    #[validate(length(min = 8, max = 128))]
    pub new_password: String,
}

/// Body for `POST /api/interests`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendInterestRequest {
    /// Recipient user ID.
    pub to_user: Uuid,
    /// Optional note shown with the interest.
    pub message: Option<String>,
}

/// Body for `POST /api/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    /// Recipient user ID.
    pub receiver_id: Uuid,
    /// Message text.
    pub content: String,
}

/// Body for `POST /api/questions`.
#[derive(Debug, Clone, Deserialize)]
pub struct AskQuestionRequest {
    /// Question title.
    pub title: String,
    /// Question body.
    pub content: String,
    /// Category slug.
    pub category: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body for `PUT /api/questions/{id}`. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuestionRequest {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New category slug.
    pub category: Option<String>,
    /// Replacement tag list.
    pub tags: Option<Vec<String>>,
}

/// Body for `POST /api/questions/{id}/answers`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    /// Answer text.
    pub content: String,
}

/// Body for vote endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct VoteRequest {
    /// `true` for an upvote, `false` for a downvote.
    pub upvote: bool,
}

/// Browser push subscription keys, as produced by
/// `PushSubscription.toJSON()`.
#[derive(Debug, Clone, Deserialize)]
pub struct PushKeys {
    /// Client public key.
    pub p256dh: String,
    /// Client auth secret.
    pub auth: String,
}

/// Body for `POST /api/push/subscribe`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscribePushRequest {
    /// Push service endpoint URL.
    pub endpoint: String,
    /// Encryption keys.
    pub keys: PushKeys,
}

/// Body for `POST /api/push/unsubscribe`.
#[derive(Debug, Clone, Deserialize)]
pub struct UnsubscribePushRequest {
    /// Push service endpoint URL to remove.
    pub endpoint: String,
}

/// Query parameters for listing notifications.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationFilter {
    /// When `true`, only unread notifications are returned.
    #[serde(default)]
    pub unread_only: bool,
}

/// Query parameters for listing questions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionFilter {
    /// Restrict to one category.
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn register_request_validation() {
        let ok = RegisterRequest {
            username: "priya_s".into(),
            email: "priya@example.com".into(),
            password: "correct horse battery".into(),
            display_name: None,
            gender: None,
            date_of_birth: None,
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".into(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "short".into(),
            ..ok
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn push_subscribe_deserializes_browser_shape() {
        let json = r#"{
            "endpoint": "https://push.example.com/send/abc",
            "keys": { "p256dh": "BKey", "auth": "secret" }
        }"#;
        let req: SubscribePushRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.keys.p256dh, "BKey");
    }
}
