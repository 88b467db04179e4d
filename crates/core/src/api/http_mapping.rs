//! Pure functions for mapping API errors to HTTP status codes.

use super::ApiError;

/// Maps an [`ApiError`] to an HTTP status code.
///
/// - `MissingIdentifier`, `InvalidBody` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `UnsupportedRoute` -> 405 (Method Not Allowed)
/// - `CreateFailed`, `UpdateFailed`, `Backend`, `Unhandled` -> 500
///
/// # Examples
///
/// ```
/// use inventory_core::api::{api_error_to_status_code, ApiError};
///
/// assert_eq!(api_error_to_status_code(&ApiError::UnsupportedRoute), 405);
/// ```
pub fn api_error_to_status_code(error: &ApiError) -> u16 {
    match error {
        ApiError::MissingIdentifier => 400,
        ApiError::InvalidBody(_) => 400,
        ApiError::NotFound(_) => 404,
        ApiError::UnsupportedRoute => 405,
        ApiError::CreateFailed(_) => 500,
        ApiError::UpdateFailed(_) => 500,
        ApiError::Backend(_) => 500,
        ApiError::Unhandled(_) => 500,
    }
}
