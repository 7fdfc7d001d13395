//! Profile photo endpoints.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use sangam_core::error::AppError;
use sangam_core::types::response::ApiResponse;
use sangam_entity::user::Photo;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// `POST /api/profiles/me/photos`
///
/// Accepts a multipart form with one file field.
pub async fn upload(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Photo>>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        let Some(filename) = field.file_name().map(|f| f.to_string()) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;

        let photo = state.photo_service.upload(&ctx, data, &filename).await?;
        return Ok((StatusCode::CREATED, Json(ApiResponse::ok(photo))));
    }

    Err(ApiError(AppError::validation(
        "Multipart body contained no file field",
    )))
}

/// `GET /api/profiles/me/photos`
pub async fn list(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<Vec<Photo>>>, ApiError> {
    let photos = state.photo_service.list(&ctx).await?;
    Ok(Json(ApiResponse::ok(photos)))
}

/// `DELETE /api/profiles/me/photos/{id}`
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(photo_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.photo_service.delete(&ctx, photo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /api/profiles/me/photos/{id}/primary`
pub async fn set_primary(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(photo_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Photo>>, ApiError> {
    let photo = state.photo_service.set_primary(&ctx, photo_id).await?;
    Ok(Json(ApiResponse::ok(photo)))
}
