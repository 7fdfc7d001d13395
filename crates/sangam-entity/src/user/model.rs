//! User entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::UserStatus;

/// A registered member of the Sangam platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Gender.
    pub gender: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// City/region of residence.
    pub location: Option<String>,
    /// Education summary.
    pub education: Option<String>,
    /// Occupation summary.
    pub occupation: Option<String>,
    /// Free-form bio text.
    pub bio: Option<String>,
    /// Horoscope details (raasi, nakshatra, birth time/place).
    pub horoscope: Option<serde_json::Value>,
    /// Partner preferences (age/height range, desired gender/location).
    pub preferences: Option<serde_json::Value>,
    /// Whether the user accepts interest requests.
    pub allow_interests: bool,
    /// Whether the user accepts direct messages.
    pub allow_messages: bool,
    /// Account status.
    pub status: UserStatus,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Age in whole years, if a date of birth is set.
    pub fn age(&self, today: NaiveDate) -> Option<i32> {
        let dob = self.date_of_birth?;
        let mut age = today.years_since(dob)? as i32;
        if age < 0 {
            age = 0;
        }
        Some(age)
    }
}

/// A profile photo belonging to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    /// Unique photo identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Backend-relative storage path.
    pub path: String,
    /// Public URL.
    pub url: String,
    /// Whether this is the profile's primary photo.
    pub is_primary: bool,
    /// Order index among the user's photos.
    pub position: i32,
    /// When the photo was uploaded.
    pub created_at: DateTime<Utc>,
}

/// Sort photos for display: the primary photo first, then ascending
/// position. At most one photo is primary per user, enforced at the store.
pub fn sort_photos_for_display(photos: &mut [Photo]) {
    photos.sort_by(|a, b| {
        b.is_primary
            .cmp(&a.is_primary)
            .then(a.position.cmp(&b.position))
    });
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name (optional).
    pub display_name: Option<String>,
    /// Gender (optional).
    pub gender: Option<String>,
    /// Date of birth (optional).
    pub date_of_birth: Option<NaiveDate>,
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name.
    pub display_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New education summary.
    pub education: Option<String>,
    /// New occupation summary.
    pub occupation: Option<String>,
    /// New bio text.
    pub bio: Option<String>,
    /// New horoscope details.
    pub horoscope: Option<serde_json::Value>,
    /// New partner preferences.
    pub preferences: Option<serde_json::Value>,
    /// New interest-request setting.
    pub allow_interests: Option<bool>,
    /// New direct-message setting.
    pub allow_messages: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(is_primary: bool, position: i32) -> Photo {
        Photo {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            path: String::new(),
            url: String::new(),
            is_primary,
            position,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_primary_photo_sorts_first() {
        let mut photos = vec![photo(false, 0), photo(false, 1), photo(true, 5)];
        sort_photos_for_display(&mut photos);
        assert!(photos[0].is_primary);
        assert_eq!(photos[1].position, 0);
        assert_eq!(photos[2].position, 1);
    }

    #[test]
    fn test_no_primary_sorts_by_position() {
        let mut photos = vec![photo(false, 3), photo(false, 1), photo(false, 2)];
        sort_photos_for_display(&mut photos);
        let positions: Vec<i32> = photos.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }
}
