use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageResponse},
        auth::{AccessTokenDto, AdminUserDto, ChangePasswordDto, LoginDto, LoginResponseDto, RefreshTokenDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with admin credentials.
///
/// Verifies the username and password and opens a session consisting of a short-lived
/// access token and a long-lived refresh token.
///
/// # Returns
/// - `200 OK` - Tokens and the authenticated user
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Invalid credentials
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<LoginResponseDto>),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = AuthService::new(&state.db, &state.jwt, state.refresh_token_ttl);

    let session = service.login(&payload.username, &payload.password).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            "Login successful",
            session.into_dto(),
        )),
    ))
}

/// Exchange a refresh token for a new access token.
///
/// # Returns
/// - `200 OK` - New access token and its lifetime in seconds
/// - `401 Unauthorized` - Refresh token unknown, revoked or expired
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "Access token refreshed", body = ApiResponse<AccessTokenDto>),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Session expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    payload: Result<Json<RefreshTokenDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = AuthService::new(&state.db, &state.jwt, state.refresh_token_ttl);

    let (access_token, expires_in) = service.refresh(&payload.refresh_token).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            "Token refreshed",
            AccessTokenDto {
                access_token,
                expires_in,
            },
        )),
    ))
}

/// Log out, revoking every refresh token of the caller.
///
/// # Access Control
/// - `Admin` - Requires a valid bearer token
///
/// # Returns
/// - `200 OK` - Logged out
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = AuthService::new(&state.db, &state.jwt, state.refresh_token_ttl);

    service.logout(user.id).await?;

    Ok((StatusCode::OK, Json(MessageResponse::new("Logged out"))))
}

/// Get the currently authenticated admin.
///
/// # Access Control
/// - `Admin` - Requires a valid bearer token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = ApiResponse<AdminUserDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(user.into_dto()))))
}

/// Change the caller's password.
///
/// # Access Control
/// - `Admin` - Requires a valid bearer token
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - New password shorter than 8 characters
/// - `401 Unauthorized` - Missing token or wrong current password
#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Invalid new password", body = ErrorDto),
        (status = 401, description = "Authentication required or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ChangePasswordDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    payload.validate()?;

    let service = AuthService::new(&state.db, &state.jwt, state.refresh_token_ttl);

    service
        .change_password(user.id, &payload.current_password, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Password changed successfully")),
    ))
}
