//! Interest lifecycle status.

use serde::{Deserialize, Serialize};

/// State of an interest request.
///
/// Transitions are one-way: `Pending -> Accepted` or `Pending -> Rejected`.
/// A decided interest never returns to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interest_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterestStatus {
    /// Awaiting the recipient's decision.
    Pending,
    /// Accepted by the recipient. Terminal.
    Accepted,
    /// Rejected by the recipient. Terminal.
    Rejected,
}

impl InterestStatus {
    /// Whether the recipient has decided on this interest.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decided() {
        assert!(!InterestStatus::Pending.is_decided());
        assert!(InterestStatus::Accepted.is_decided());
        assert!(InterestStatus::Rejected.is_decided());
    }
}
