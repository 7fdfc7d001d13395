//! Direct messaging between users.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use sangam_core::error::AppError;
use sangam_core::result::AppResult;
use sangam_database::repositories::message::MessageRepository;
use sangam_database::repositories::user::UserRepository;
use sangam_entity::message::{ConversationSummary, MAX_MESSAGE_LENGTH, Message};
use sangam_entity::notification::NotificationKind;

use crate::context::RequestContext;
use crate::notification::fanout::Notifier;

use super::view::{self, ConversationView};

/// Default number of messages loaded per conversation page.
const CONVERSATION_PAGE_SIZE: i64 = 50;

/// Manages direct messages and the conversation inbox.
#[derive(Debug, Clone)]
pub struct ConversationService {
    messages: Arc<MessageRepository>,
    users: Arc<UserRepository>,
    notifier: Notifier,
}

impl ConversationService {
    /// Creates a new conversation service.
    pub fn new(
        messages: Arc<MessageRepository>,
        users: Arc<UserRepository>,
        notifier: Notifier,
    ) -> Self {
        Self {
            messages,
            users,
            notifier,
        }
    }

    /// Sends a message from the current user.
    pub async fn send(
        &self,
        ctx: &RequestContext,
        receiver_id: Uuid,
        content: &str,
    ) -> AppResult<Message> {
        if receiver_id == ctx.user_id {
            return Err(AppError::validation("Cannot message yourself"));
        }

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Message content is required"));
        }
        if trimmed.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(AppError::validation(format!(
                "Message exceeds {MAX_MESSAGE_LENGTH} characters"
            )));
        }

        let receiver = self
            .users
            .find_active_by_id(receiver_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !receiver.allow_messages {
            return Err(AppError::conflict("This user is not accepting messages"));
        }

        let message = self
            .messages
            .create(ctx.user_id, receiver_id, trimmed)
            .await?;

        self.notifier
            .notify(
                receiver_id,
                NotificationKind::MessageReceived,
                "New message",
                &format!("{} sent you a message", ctx.username),
                Some(ctx.user_id),
                Some(message.id),
            )
            .await?;
        self.notifier
            .realtime()
            .hint_message(receiver_id, ctx.user_id);

        info!(
            message_id = %message.id,
            sender = %ctx.user_id,
            receiver = %receiver_id,
            "Message sent"
        );
        Ok(message)
    }

    /// Loads the conversation with a counterpart, prepared for display.
    ///
    /// Viewing a conversation marks the counterpart's messages to the
    /// viewer as read.
    pub async fn conversation(
        &self,
        ctx: &RequestContext,
        counterpart_id: Uuid,
    ) -> AppResult<ConversationView> {
        let messages = self
            .messages
            .conversation(ctx.user_id, counterpart_id, CONVERSATION_PAGE_SIZE)
            .await?;

        self.messages
            .mark_conversation_read(ctx.user_id, counterpart_id)
            .await?;

        Ok(view::build_view(messages, ctx.user_id))
    }

    /// Marks the counterpart's messages to the viewer as read.
    pub async fn mark_read(&self, ctx: &RequestContext, counterpart_id: Uuid) -> AppResult<u64> {
        self.messages
            .mark_conversation_read(ctx.user_id, counterpart_id)
            .await
    }

    /// The current user's conversation inbox, most recent activity first.
    pub async fn inbox(&self, ctx: &RequestContext) -> AppResult<Vec<ConversationSummary>> {
        self.messages.list_conversations(ctx.user_id).await
    }

    /// Total unread messages for the badge.
    pub async fn unread_total(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.messages.unread_total(ctx.user_id).await
    }
}
