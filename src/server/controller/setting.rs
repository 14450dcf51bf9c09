use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        setting::SettingsDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::setting::SettingService,
        state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTING_TAG: &str = "setting";

/// Get every site setting as a key → value map.
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTING_TAG,
    responses(
        (status = 200, description = "Site settings", body = ApiResponse<BTreeMap<String, String>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SettingService::new(&state.db);

    let settings = service.get_all().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(settings))))
}

/// Insert or overwrite the provided settings.
///
/// Keys missing from the body keep their stored value.
///
/// # Access Control
/// - `Admin` - Only admins can change settings
///
/// # Returns
/// - `200 OK` - Full settings map after the update
/// - `400 Bad Request` - Body is not a string → string map, or a key is blank
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = SETTING_TAG,
    request_body = BTreeMap<String, String>,
    responses(
        (status = 200, description = "Settings updated", body = ApiResponse<BTreeMap<String, String>>),
        (status = 400, description = "Invalid settings", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SettingsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;

    let service = SettingService::new(&state.db);

    let settings = service.update(payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Settings updated", settings)),
    ))
}
