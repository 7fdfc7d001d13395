//! Health probe.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// `GET /api/health`
///
/// Returns 200 when both the database and the upload store answer,
/// 503 otherwise. Unauthenticated so load balancers can probe it.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .is_ok();
    let storage = state
        .file_store
        .health_check()
        .await
        .unwrap_or(false);

    let healthy = database && storage;
    let body = HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        database,
        storage,
    };
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body))
}
