//! Profile endpoints: own profile, viewing others, browsing.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use sangam_core::types::pagination::PageResponse;
use sangam_core::types::response::ApiResponse;
use sangam_entity::profile_view::ProfileView;
use sangam_entity::user::{UpdateProfile, User};
use sangam_service::profile::ProfileWithPhotos;

use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// `GET /api/profiles/me`
pub async fn me(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<ProfileWithPhotos>>, ApiError> {
    let profile = state.profile_service.me(&ctx).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// `PUT /api/profiles/me`
pub async fn update(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Json(req): Json<UpdateProfile>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.profile_service.update(&ctx, &req).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// `DELETE /api/profiles/me`
pub async fn deactivate(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<StatusCode, ApiError> {
    state.profile_service.deactivate(&ctx).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/profiles/{id}`
pub async fn view(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProfileWithPhotos>>, ApiError> {
    let profile = state.profile_service.view(&ctx, user_id).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// `GET /api/profiles`
pub async fn browse(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<User>>>, ApiError> {
    let page = state
        .profile_service
        .browse(&ctx, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// `GET /api/profiles/me/viewers`
pub async fn viewers(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ProfileView>>>, ApiError> {
    let page = state
        .profile_service
        .viewers(&ctx, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}
