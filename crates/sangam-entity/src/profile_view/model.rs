//! Profile view entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A record of one user viewing another's profile.
///
/// One row per view event; used only for "who viewed me" listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileView {
    /// Unique view identifier.
    pub id: Uuid,
    /// The viewing user.
    pub viewer_id: Uuid,
    /// The viewed user.
    pub viewed_user_id: Uuid,
    /// When the view happened.
    pub viewed_at: DateTime<Utc>,
    /// Whether the viewer has since messaged the viewed user.
    pub has_messaged: bool,
}
