//! Connection registry tracking active WebSocket connections per user.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use sangam_core::config::RealtimeConfig;

use crate::message::Hint;

/// Unique connection identifier.
pub type ConnectionId = Uuid;

/// A handle to a single WebSocket connection.
///
/// Holds the sender channel for pushing serialized hints to the client
/// task, plus metadata about the connected user.
#[derive(Debug)]
pub struct ConnectionHandle {
    /// Unique connection ID.
    pub id: ConnectionId,
    /// User who owns this connection.
    pub user_id: Uuid,
    /// Username (cached for logging).
    pub username: String,
    /// Sender for outbound serialized hints.
    sender: mpsc::Sender<String>,
    /// When the connection was established.
    pub connected_at: DateTime<Utc>,
    /// Whether the connection is still alive.
    alive: AtomicBool,
}

impl ConnectionHandle {
    fn new(user_id: Uuid, username: String, sender: mpsc::Sender<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            username,
            sender,
            connected_at: Utc::now(),
            alive: AtomicBool::new(true),
        }
    }

    /// Push a serialized hint to this connection without blocking.
    ///
    /// A full buffer drops the hint; the client recovers by polling.
    pub fn send(&self, msg: String) -> bool {
        if !self.is_alive() {
            return false;
        }
        match self.sender.try_send(msg) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(conn_id = %self.id, "Hint buffer full, dropping hint");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.mark_closed();
                false
            }
        }
    }

    /// Check if the connection is alive.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Mark the connection as closed.
    pub fn mark_closed(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

/// Thread-safe registry of all active WebSocket connections.
#[derive(Debug)]
pub struct ConnectionRegistry {
    /// User ID to connection handles, oldest first.
    by_user: DashMap<Uuid, Vec<Arc<ConnectionHandle>>>,
    /// Connection ID to handle for direct lookup.
    by_id: DashMap<ConnectionId, Arc<ConnectionHandle>>,
    /// Configuration.
    config: RealtimeConfig,
}

impl ConnectionRegistry {
    /// Creates a new empty registry.
    pub fn new(config: RealtimeConfig) -> Self {
        Self {
            by_user: DashMap::new(),
            by_id: DashMap::new(),
            config,
        }
    }

    /// Registers a new authenticated connection.
    ///
    /// Returns the connection handle and the receiver the socket task
    /// drains. A user at the connection cap has their oldest connection
    /// closed to make room.
    pub fn register(
        &self,
        user_id: Uuid,
        username: String,
    ) -> (Arc<ConnectionHandle>, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(self.config.channel_buffer_size);
        let handle = Arc::new(ConnectionHandle::new(user_id, username, tx));

        let existing = self.connections_for(&user_id);
        if existing.len() >= self.config.max_connections_per_user {
            warn!(
                user_id = %user_id,
                count = existing.len(),
                max = self.config.max_connections_per_user,
                "User at max connections, closing oldest"
            );
            if let Some(oldest) = existing.first() {
                oldest.mark_closed();
                self.remove(&oldest.id);
            }
        }

        self.by_id.insert(handle.id, handle.clone());
        self.by_user
            .entry(user_id)
            .or_default()
            .push(handle.clone());

        info!(conn_id = %handle.id, user_id = %user_id, "WebSocket connection registered");
        (handle, rx)
    }

    /// Unregisters a connection.
    pub fn unregister(&self, conn_id: &ConnectionId) {
        if let Some(handle) = self.remove(conn_id) {
            handle.mark_closed();
            info!(conn_id = %conn_id, user_id = %handle.user_id, "WebSocket connection unregistered");
        }
    }

    fn remove(&self, conn_id: &ConnectionId) -> Option<Arc<ConnectionHandle>> {
        let (_, handle) = self.by_id.remove(conn_id)?;
        if let Some(mut connections) = self.by_user.get_mut(&handle.user_id) {
            connections.retain(|c| c.id != *conn_id);
            if connections.is_empty() {
                drop(connections);
                self.by_user.remove(&handle.user_id);
            }
        }
        Some(handle)
    }

    fn connections_for(&self, user_id: &Uuid) -> Vec<Arc<ConnectionHandle>> {
        self.by_user
            .get(user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Sends a hint to all of a user's connections.
    ///
    /// Returns how many connections accepted the hint. Zero is normal
    /// for an offline user.
    pub fn send_to_user(&self, user_id: &Uuid, hint: &Hint) -> usize {
        let connections = self.connections_for(user_id);
        if connections.is_empty() {
            return 0;
        }

        let msg = match serde_json::to_string(hint) {
            Ok(m) => m,
            Err(e) => {
                warn!(error = %e, "Failed to serialize hint");
                return 0;
            }
        };

        connections
            .iter()
            .filter(|conn| conn.send(msg.clone()))
            .count()
    }

    /// Checks if a user has at least one live connection.
    pub fn is_user_connected(&self, user_id: &Uuid) -> bool {
        !self.connections_for(user_id).is_empty()
    }

    /// Total number of active connections.
    pub fn connection_count(&self) -> usize {
        self.by_id.len()
    }

    /// Number of unique connected users.
    pub fn user_count(&self) -> usize {
        self.by_user.len()
    }

    /// Closes all connections.
    pub fn close_all(&self) {
        let ids: Vec<ConnectionId> = self.by_id.iter().map(|entry| *entry.key()).collect();
        for id in &ids {
            if let Some(handle) = self.remove(id) {
                handle.mark_closed();
            }
        }
        info!(count = ids.len(), "All connections closed");
    }
}
