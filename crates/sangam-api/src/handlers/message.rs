//! Direct messaging endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use sangam_core::types::response::{ApiResponse, CountResponse};
use sangam_entity::message::{ConversationSummary, Message};
use sangam_service::conversation::ConversationView;

use crate::dto::request::SendMessageRequest;
use crate::dto::response::UpdatedResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// `POST /api/messages`
pub async fn send(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Message>>), ApiError> {
    let message = state
        .conversation_service
        .send(&ctx, req.receiver_id, &req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(message))))
}

/// `GET /api/messages/conversations`
pub async fn inbox(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<Vec<ConversationSummary>>>, ApiError> {
    let conversations = state.conversation_service.inbox(&ctx).await?;
    Ok(Json(ApiResponse::ok(conversations)))
}

/// `GET /api/messages/conversations/{user_id}`
///
/// Fetching a conversation also marks the counterpart's messages to
/// the viewer as read, so the unread count drops without a separate
/// call. `PUT .../read` exists for clients that render previews
/// without opening the conversation.
pub async fn conversation(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(counterpart_id): Path<Uuid>,
) -> Result<Json<ApiResponse<ConversationView>>, ApiError> {
    let view = state
        .conversation_service
        .conversation(&ctx, counterpart_id)
        .await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// `PUT /api/messages/conversations/{user_id}/read`
///
/// Explicit read receipt for clients that did not fetch the
/// conversation body.
pub async fn mark_read(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(counterpart_id): Path<Uuid>,
) -> Result<Json<ApiResponse<UpdatedResponse>>, ApiError> {
    let updated = state
        .conversation_service
        .mark_read(&ctx, counterpart_id)
        .await?;
    Ok(Json(ApiResponse::ok(UpdatedResponse { updated })))
}

/// `GET /api/messages/unread-count`
pub async fn unread_count(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.conversation_service.unread_total(&ctx).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}
