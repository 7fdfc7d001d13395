//! WebSocket endpoint delivering real-time hints.
//!
//! Browsers cannot set an Authorization header on the WebSocket
//! handshake, so the access token is passed as a query parameter.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the WebSocket handshake.
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    /// JWT access token.
    pub token: String,
}

/// `GET /api/ws?token=...`
pub async fn upgrade(
    State(state): State<AppState>,
    Query(query): Query<WsQuery>,
    ws: WebSocketUpgrade,
) -> Result<Response, ApiError> {
    let claims = state.jwt_decoder.decode_access_token(&query.token)?;
    let user_id = claims.user_id();
    let username = claims.username.clone();

    Ok(ws.on_upgrade(move |socket| handle_socket(state, socket, user_id, username)))
}

/// Drives one connection until either side closes it.
async fn handle_socket(state: AppState, socket: WebSocket, user_id: uuid::Uuid, username: String) {
    let (handle, mut rx) = state.realtime.register(user_id, username);
    let conn_id = handle.id;

    let (mut sink, mut stream) = socket.split();

    // Outbound: drain queued hints into the socket.
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // Inbound: clients send nothing meaningful; watch for close.
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = stream.next().await {
            if matches!(msg, Message::Close(_)) {
                break;
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    handle.mark_closed();
    state.realtime.unregister(&conn_id);
    debug!(%conn_id, %user_id, "WebSocket connection closed");
}
