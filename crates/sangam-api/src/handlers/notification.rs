//! Notification feed endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use sangam_core::types::pagination::PageResponse;
use sangam_core::types::response::{ApiResponse, CountResponse};
use sangam_entity::notification::Notification;

use crate::dto::request::NotificationFilter;
use crate::dto::response::UpdatedResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// `GET /api/notifications`
pub async fn list(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Query(filter): Query<NotificationFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Notification>>>, ApiError> {
    let page = state
        .notification_service
        .list(&ctx, filter.unread_only, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// `GET /api/notifications/unread-count`
pub async fn unread_count(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.notification_service.unread_count(&ctx).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// `PUT /api/notifications/{id}/read`
pub async fn mark_read(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(notification_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    let notification = state
        .notification_service
        .mark_read(&ctx, notification_id)
        .await?;
    Ok(Json(ApiResponse::ok(notification)))
}

/// `PUT /api/notifications/read-all`
pub async fn mark_all_read(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<UpdatedResponse>>, ApiError> {
    let updated = state.notification_service.mark_all_read(&ctx).await?;
    Ok(Json(ApiResponse::ok(UpdatedResponse { updated })))
}

/// `DELETE /api/notifications/{id}`
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(notification_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .notification_service
        .delete(&ctx, notification_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
