//! Account endpoints: register, login, refresh, change password.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use sangam_core::types::response::ApiResponse;
use sangam_service::account::AuthTokens;

use crate::dto::request::{
    ChangePasswordRequest, LoginRequest, RefreshRequest, RegisterRequest,
};
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// `POST /api/auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthTokens>>), ApiError> {
    validate_dto(&req)?;
    let tokens = state.account_service.register(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(tokens))))
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthTokens>>, ApiError> {
    let tokens = state
        .account_service
        .login(&req.username, &req.password)
        .await?;
    Ok(Json(ApiResponse::ok(tokens)))
}

/// `POST /api/auth/refresh`
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<AuthTokens>>, ApiError> {
    let tokens = state.account_service.refresh(&req.refresh_token).await?;
    Ok(Json(ApiResponse::ok(tokens)))
}

/// `POST /api/auth/change-password`
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    validate_dto(&req)?;
    state
        .account_service
        .change_password(&ctx, &req.current_password, &req.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
