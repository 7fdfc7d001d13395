//! Web-push subscription endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use sangam_core::types::response::ApiResponse;
use sangam_entity::push::PushSubscription;

use crate::dto::request::{SubscribePushRequest, UnsubscribePushRequest};
use crate::dto::response::VapidResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// `GET /api/push/vapid-key`
///
/// Public key clients need before calling `PushManager.subscribe`.
pub async fn vapid_key(
    State(state): State<AppState>,
    AuthUser(_ctx): AuthUser,
) -> Json<ApiResponse<VapidResponse>> {
    let enabled = state.push_delivery.is_enabled();
    let public_key = if enabled {
        Some(state.push_delivery.vapid_public_key().to_string())
    } else {
        None
    };
    Json(ApiResponse::ok(VapidResponse {
        enabled,
        public_key,
    }))
}

/// `POST /api/push/subscribe`
pub async fn subscribe(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Json(req): Json<SubscribePushRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PushSubscription>>), ApiError> {
    let subscription = state
        .push_service
        .subscribe(&ctx, &req.endpoint, &req.keys.p256dh, &req.keys.auth)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(subscription))))
}

/// `POST /api/push/unsubscribe`
pub async fn unsubscribe(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Json(req): Json<UnsubscribePushRequest>,
) -> Result<StatusCode, ApiError> {
    state.push_service.unsubscribe(&ctx, &req.endpoint).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/push/subscriptions`
pub async fn list(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<Vec<PushSubscription>>>, ApiError> {
    let subscriptions = state.push_service.list(&ctx).await?;
    Ok(Json(ApiResponse::ok(subscriptions)))
}
