use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, IdDto, MessageResponse, PaginatedResponse},
        contact::{ContactDto, ContactStatus, CreateContactDto, UpdateContactStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::contact::ContactService,
        state::AppState,
        util::pagination::PageQuery,
    },
};

/// Tag for grouping contact message endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

#[derive(Deserialize, Default)]
pub struct ContactQuery {
    pub status: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl ContactQuery {
    fn status(&self) -> Result<Option<ContactStatus>, AppError> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|status| !status.is_empty())
            .map(|status| status.parse::<ContactStatus>().map_err(AppError::BadRequest))
            .transpose()
    }
}

/// Send a message through the contact form.
///
/// # Returns
/// - `201 Created` - Id of the stored message
/// - `400 Bad Request` - Missing name, subject or message, or invalid email
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = CONTACT_TAG,
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Message sent", body = ApiResponse<IdDto>),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<CreateContactDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let service = ContactService::new(&state.db);

    let contact = service.create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Message sent successfully",
            IdDto { id: contact.id },
        )),
    ))
}

/// Get paginated contact messages, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can read messages
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = CONTACT_TAG,
    params(
        ("status" = Option<ContactStatus>, Query, description = "Filter by status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Contact messages", body = PaginatedResponse<ContactDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_contacts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ContactQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let status = query.status()?;
    let (page, per_page) = PageQuery {
        page: query.page,
        per_page: query.per_page,
    }
    .resolve();

    let service = ContactService::new(&state.db);

    let contacts = service.get_paginated(status, page, per_page).await?;

    Ok((
        StatusCode::OK,
        Json(contacts.into_dto(|contact| contact.into_dto())),
    ))
}

/// Get a single contact message.
///
/// # Access Control
/// - `Admin` - Only admins can read messages
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Contact message ID")),
    responses(
        (status = 200, description = "Contact message", body = ApiResponse<ContactDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ContactService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(contact) => Ok((StatusCode::OK, Json(ApiResponse::ok(contact.into_dto())))),
        None => Err(AppError::NotFound("Message not found".to_string())),
    }
}

/// Mark a contact message as read or replied.
///
/// # Access Control
/// - `Admin` - Only admins can manage messages
#[utoipa::path(
    patch,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Contact message ID")),
    request_body = UpdateContactStatusDto,
    responses(
        (status = 200, description = "Message updated", body = ApiResponse<ContactDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_contact_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateContactStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;

    let service = ContactService::new(&state.db);

    match service.update_status(id, payload.status).await? {
        Some(contact) => Ok((
            StatusCode::OK,
            Json(ApiResponse::with_message(
                "Message updated",
                contact.into_dto(),
            )),
        )),
        None => Err(AppError::NotFound("Message not found".to_string())),
    }
}

/// Delete a contact message.
///
/// # Access Control
/// - `Admin` - Only admins can manage messages
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Contact message ID")),
    responses(
        (status = 200, description = "Message deleted", body = MessageResponse),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ContactService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Message not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageResponse::new("Message deleted"))))
}
