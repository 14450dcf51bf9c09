use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, IdDto, MessageResponse},
        menu_item::{MenuItemDto, SaveMenuItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::menu_item::MenuItemService,
        state::AppState,
    },
};

/// Tag for grouping menu item endpoints in OpenAPI documentation
pub static MENU_ITEM_TAG: &str = "menu_item";

/// Get every menu item, grouped by category.
#[utoipa::path(
    get,
    path = "/api/menu/items",
    tag = MENU_ITEM_TAG,
    responses(
        (status = 200, description = "Menu items", body = ApiResponse<Vec<MenuItemDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MenuItemService::new(&state.db);

    let items = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            items.into_iter().map(|item| item.into_dto()).collect::<Vec<_>>(),
        )),
    ))
}

/// Create a menu item.
///
/// # Access Control
/// - `Admin` - Only admins can edit the menu
///
/// # Returns
/// - `201 Created` - Id of the new item
/// - `400 Bad Request` - Missing category, name or price
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    post,
    path = "/api/menu/items",
    tag = MENU_ITEM_TAG,
    request_body = SaveMenuItemDto,
    responses(
        (status = 201, description = "Menu item created", body = ApiResponse<IdDto>),
        (status = 400, description = "Invalid menu item", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SaveMenuItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    payload.validate()?;

    let service = MenuItemService::new(&state.db);

    let item = service.create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Menu item created",
            IdDto { id: item.id },
        )),
    ))
}

/// Replace every field of a menu item.
///
/// # Access Control
/// - `Admin` - Only admins can edit the menu
///
/// # Returns
/// - `200 OK` - Updated item
/// - `404 Not Found` - No item with that id
#[utoipa::path(
    put,
    path = "/api/menu/items/{id}",
    tag = MENU_ITEM_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    request_body = SaveMenuItemDto,
    responses(
        (status = 200, description = "Menu item updated", body = ApiResponse<MenuItemDto>),
        (status = 400, description = "Invalid menu item", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<SaveMenuItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    payload.validate()?;

    let service = MenuItemService::new(&state.db);

    match service.update(id, payload.into()).await? {
        Some(item) => Ok((
            StatusCode::OK,
            Json(ApiResponse::with_message(
                "Menu item updated",
                item.into_dto(),
            )),
        )),
        None => Err(AppError::NotFound("Menu item not found".to_string())),
    }
}

/// Delete a menu item.
///
/// # Access Control
/// - `Admin` - Only admins can edit the menu
#[utoipa::path(
    delete,
    path = "/api/menu/items/{id}",
    tag = MENU_ITEM_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item deleted", body = MessageResponse),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = MenuItemService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Menu item not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageResponse::new("Menu item deleted"))))
}
