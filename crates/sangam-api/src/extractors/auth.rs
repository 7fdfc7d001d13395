//! Bearer-token authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use sangam_core::error::AppError;
use sangam_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor that authenticates the request from its `Authorization`
/// header and yields a [`RequestContext`] for the service layer.
///
/// Rejects with 401 when the header is missing, malformed, or the
/// token fails validation.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::authentication("Missing or malformed Authorization header"))?;

        let claims = state.jwt_decoder.decode_access_token(token)?;

        let ctx = RequestContext::new(
            claims.user_id(),
            claims.username.clone(),
            client_ip(parts),
            header_string(parts, header::USER_AGENT),
        );
        Ok(Self(ctx))
    }
}

/// Pulls the token out of a `Bearer <token>` Authorization header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Best-effort client IP: the first X-Forwarded-For hop, else unknown.
fn client_ip(parts: &Parts) -> String {
    parts
        .headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn header_string(parts: &Parts, name: header::HeaderName) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}
