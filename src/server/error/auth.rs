use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Username unknown or password mismatch during login.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Request to a protected route without an `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature, issuer or expiry validation.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// Refresh token unknown, revoked, or past its expiry.
    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    /// Token references an admin user that no longer exists.
    #[error("Admin user {0} not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the role required by the route.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Current password supplied to change-password did not verify.
    #[error("Current password is incorrect")]
    WrongPassword,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `InvalidCredentials` / `WrongPassword` → 401 with the error message
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 "Authentication required"
/// - `InvalidRefreshToken` → 401 "Session expired. Please login again."
/// - `AccessDenied` → 403 Forbidden
///
/// Token failures are logged at debug level while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::InvalidCredentials | Self::WrongPassword => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            Self::InvalidRefreshToken => (
                StatusCode::UNAUTHORIZED,
                "Session expired. Please login again.".to_string(),
            ),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action".to_string(),
            ),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
