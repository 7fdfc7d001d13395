//! Request and response DTOs for the HTTP API.

pub mod request;
pub mod response;

use validator::Validate;

use sangam_core::error::AppError;

use crate::error::ApiError;

/// Runs derive-based validation and maps failures to a 400 response.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), ApiError> {
    dto.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))
}
