//! Real-time engine facade wired into application state.

use std::sync::Arc;

use tokio::sync::mpsc;
use uuid::Uuid;

use sangam_core::config::RealtimeConfig;
use sangam_entity::notification::Notification;

use crate::message::Hint;
use crate::registry::{ConnectionHandle, ConnectionRegistry};

/// The real-time hint engine.
///
/// Owns the connection registry and exposes the few entry points the
/// service layer needs: register a socket, drop it, and nudge a user.
#[derive(Debug, Clone)]
pub struct RealtimeEngine {
    registry: Arc<ConnectionRegistry>,
}

impl RealtimeEngine {
    /// Creates a new engine from configuration.
    pub fn new(config: RealtimeConfig) -> Self {
        Self {
            registry: Arc::new(ConnectionRegistry::new(config)),
        }
    }

    /// Registers an authenticated WebSocket connection.
    pub fn register(
        &self,
        user_id: Uuid,
        username: String,
    ) -> (Arc<ConnectionHandle>, mpsc::Receiver<String>) {
        self.registry.register(user_id, username)
    }

    /// Unregisters a connection after its socket task ends.
    pub fn unregister(&self, conn_id: &Uuid) {
        self.registry.unregister(conn_id);
    }

    /// Nudges a user that a notification was stored for them.
    pub fn hint_notification(&self, notification: &Notification) {
        self.registry.send_to_user(
            &notification.user_id,
            &Hint::Notification {
                notification_id: notification.id,
                kind: notification.kind,
            },
        );
    }

    /// Nudges a receiver that a direct message arrived.
    pub fn hint_message(&self, receiver: Uuid, sender: Uuid) {
        self.registry
            .send_to_user(&receiver, &Hint::Message { from_user: sender });
    }

    /// Nudges a user about interest activity.
    pub fn hint_interest(&self, user_id: Uuid, interest_id: Uuid) {
        self.registry
            .send_to_user(&user_id, &Hint::Interest { interest_id });
    }

    /// Whether the user currently has a live connection.
    pub fn is_user_connected(&self, user_id: &Uuid) -> bool {
        self.registry.is_user_connected(user_id)
    }

    /// Total active connection count, for the health endpoint.
    pub fn connection_count(&self) -> usize {
        self.registry.connection_count()
    }

    /// Closes all connections during shutdown.
    pub fn shutdown(&self) {
        self.registry.close_all();
    }
}
