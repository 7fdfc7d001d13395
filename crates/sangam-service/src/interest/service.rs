//! Interest request lifecycle: send, accept, reject, list.
//!
//! An interest is pending until the recipient decides it; accepted and
//! rejected are terminal. Anyone other than the recipient is refused
//! outright, and a decided interest behaves like a missing one on
//! further decision attempts.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use sangam_core::error::AppError;
use sangam_core::result::AppResult;
use sangam_core::types::pagination::{PageRequest, PageResponse};
use sangam_database::repositories::interest::InterestRepository;
use sangam_database::repositories::user::UserRepository;
use sangam_entity::interest::{Interest, InterestStatus};
use sangam_entity::notification::NotificationKind;

use crate::context::RequestContext;
use crate::notification::fanout::Notifier;

/// Maximum length of the optional note attached to an interest.
const MAX_INTEREST_MESSAGE_LENGTH: usize = 500;

/// Manages interest requests between users.
#[derive(Debug, Clone)]
pub struct InterestService {
    interests: Arc<InterestRepository>,
    users: Arc<UserRepository>,
    notifier: Notifier,
}

impl InterestService {
    /// Creates a new interest service.
    pub fn new(
        interests: Arc<InterestRepository>,
        users: Arc<UserRepository>,
        notifier: Notifier,
    ) -> Self {
        Self {
            interests,
            users,
            notifier,
        }
    }

    /// Sends an interest from the current user to another user.
    pub async fn send(
        &self,
        ctx: &RequestContext,
        to_user: Uuid,
        message: Option<&str>,
    ) -> AppResult<Interest> {
        if to_user == ctx.user_id {
            return Err(AppError::validation("Cannot send an interest to yourself"));
        }

        if let Some(note) = message {
            if note.chars().count() > MAX_INTEREST_MESSAGE_LENGTH {
                return Err(AppError::validation(format!(
                    "Interest note exceeds {MAX_INTEREST_MESSAGE_LENGTH} characters"
                )));
            }
        }

        let recipient = self
            .users
            .find_active_by_id(to_user)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !recipient.allow_interests {
            return Err(AppError::conflict(
                "This user is not accepting interest requests",
            ));
        }

        let interest = self.interests.create(ctx.user_id, to_user, message).await?;

        self.notifier
            .notify(
                to_user,
                NotificationKind::InterestReceived,
                "New interest received",
                &format!("{} has expressed interest in your profile", ctx.username),
                Some(ctx.user_id),
                Some(interest.id),
            )
            .await?;
        self.notifier
            .realtime()
            .hint_interest(to_user, interest.id);

        info!(
            interest_id = %interest.id,
            from_user = %ctx.user_id,
            to_user = %to_user,
            "Interest sent"
        );
        Ok(interest)
    }

    /// Accepts a pending interest addressed to the current user.
    pub async fn accept(&self, ctx: &RequestContext, interest_id: Uuid) -> AppResult<Interest> {
        self.decide(ctx, interest_id, InterestStatus::Accepted)
            .await
    }

    /// Rejects a pending interest addressed to the current user.
    pub async fn reject(&self, ctx: &RequestContext, interest_id: Uuid) -> AppResult<Interest> {
        self.decide(ctx, interest_id, InterestStatus::Rejected)
            .await
    }

    async fn decide(
        &self,
        ctx: &RequestContext,
        interest_id: Uuid,
        decision: InterestStatus,
    ) -> AppResult<Interest> {
        let existing = self
            .interests
            .find_by_id(interest_id)
            .await?
            .ok_or_else(|| AppError::not_found("No pending interest to respond to"))?;
        if existing.to_user != ctx.user_id {
            return Err(AppError::authorization(
                "Only the recipient can respond to an interest",
            ));
        }

        // The pending guard in the UPDATE keeps the transition atomic;
        // a decided interest falls through to NotFound here.
        let interest = self
            .interests
            .decide(interest_id, ctx.user_id, decision)
            .await?
            .ok_or_else(|| AppError::not_found("No pending interest to respond to"))?;

        if decision == InterestStatus::Accepted {
            self.notifier
                .notify(
                    interest.from_user,
                    NotificationKind::InterestAccepted,
                    "Interest accepted",
                    &format!("{} has accepted your interest", ctx.username),
                    Some(ctx.user_id),
                    Some(interest.id),
                )
                .await?;
            self.notifier
                .realtime()
                .hint_interest(interest.from_user, interest.id);
        }

        info!(
            interest_id = %interest.id,
            decided_by = %ctx.user_id,
            status = ?interest.status,
            "Interest decided"
        );
        Ok(interest)
    }

    /// Interests received by the current user.
    pub async fn incoming(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<Interest>> {
        self.interests.list_incoming(ctx.user_id, &page).await
    }

    /// Interests sent by the current user.
    pub async fn outgoing(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<Interest>> {
        self.interests.list_outgoing(ctx.user_id, &page).await
    }
}
