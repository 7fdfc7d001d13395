//! Interest request endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use sangam_core::types::pagination::PageResponse;
use sangam_core::types::response::ApiResponse;
use sangam_entity::interest::Interest;

use crate::dto::request::SendInterestRequest;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// `POST /api/interests`
pub async fn send(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Json(req): Json<SendInterestRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Interest>>), ApiError> {
    let interest = state
        .interest_service
        .send(&ctx, req.to_user, req.message.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(interest))))
}

/// `POST /api/interests/{id}/accept`
pub async fn accept(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(interest_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Interest>>, ApiError> {
    let interest = state.interest_service.accept(&ctx, interest_id).await?;
    Ok(Json(ApiResponse::ok(interest)))
}

/// `POST /api/interests/{id}/reject`
pub async fn reject(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(interest_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Interest>>, ApiError> {
    let interest = state.interest_service.reject(&ctx, interest_id).await?;
    Ok(Json(ApiResponse::ok(interest)))
}

/// `GET /api/interests/incoming`
pub async fn incoming(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Interest>>>, ApiError> {
    let page = state
        .interest_service
        .incoming(&ctx, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// `GET /api/interests/outgoing`
pub async fn outgoing(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Interest>>>, ApiError> {
    let page = state
        .interest_service
        .outgoing(&ctx, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}
