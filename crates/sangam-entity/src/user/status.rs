//! User account status.

use serde::{Deserialize, Serialize};

/// Account lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Normal active account.
    Active,
    /// Suspended by an administrator.
    Suspended,
    /// Soft-deleted on account removal.
    Deleted,
}

impl UserStatus {
    /// Whether the account may log in and appear in listings.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}
