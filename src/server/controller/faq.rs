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
        api::{ApiResponse, ErrorDto, MessageResponse},
        faq::{CreateFaqDto, FaqDto, UpdateFaqDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::faq::FaqService,
        state::AppState,
    },
};

/// Tag for grouping FAQ endpoints in OpenAPI documentation
pub static FAQ_TAG: &str = "faq";

#[derive(Deserialize, Default)]
pub struct FaqQuery {
    /// `1` or `true` includes inactive FAQs; requires an admin token.
    pub all: Option<String>,
}

impl FaqQuery {
    fn include_inactive(&self) -> bool {
        matches!(self.all.as_deref(), Some("1" | "true"))
    }
}

/// Get FAQs in display order.
///
/// Anonymous callers only see active FAQs. Passing `?all=1` lists inactive ones too
/// and requires an admin token.
///
/// # Returns
/// - `200 OK` - FAQs
/// - `401 Unauthorized` - `all=1` without a valid admin token
#[utoipa::path(
    get,
    path = "/api/faqs",
    tag = FAQ_TAG,
    params(("all" = Option<String>, Query, description = "`1` to include inactive FAQs (admin only)")),
    responses(
        (status = 200, description = "FAQs", body = ApiResponse<Vec<FaqDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faqs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<FaqQuery>,
) -> Result<impl IntoResponse, AppError> {
    let include_inactive = query.include_inactive();
    if include_inactive {
        let _ = AuthGuard::new(&state, &headers)
            .require(&[Permission::Admin])
            .await?;
    }

    let service = FaqService::new(&state.db);

    let faqs = service.get_all(include_inactive).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            faqs.into_iter().map(|faq| faq.into_dto()).collect::<Vec<_>>(),
        )),
    ))
}

/// Create a FAQ after the current last one.
///
/// # Access Control
/// - `Admin` - Only admins can edit FAQs
#[utoipa::path(
    post,
    path = "/api/faqs",
    tag = FAQ_TAG,
    request_body = CreateFaqDto,
    responses(
        (status = 201, description = "FAQ created", body = ApiResponse<FaqDto>),
        (status = 400, description = "Invalid FAQ", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateFaqDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    payload.validate()?;

    let service = FaqService::new(&state.db);

    let faq = service.create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("FAQ created", faq.into_dto())),
    ))
}

/// Partially update a FAQ.
///
/// # Access Control
/// - `Admin` - Only admins can edit FAQs
#[utoipa::path(
    put,
    path = "/api/faqs/{id}",
    tag = FAQ_TAG,
    params(("id" = i32, Path, description = "FAQ ID")),
    request_body = UpdateFaqDto,
    responses(
        (status = 200, description = "FAQ updated", body = ApiResponse<FaqDto>),
        (status = 400, description = "Invalid FAQ", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "FAQ not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateFaqDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    payload.validate()?;

    let service = FaqService::new(&state.db);

    match service.update(id, payload.into()).await? {
        Some(faq) => Ok((
            StatusCode::OK,
            Json(ApiResponse::with_message("FAQ updated", faq.into_dto())),
        )),
        None => Err(AppError::NotFound("FAQ not found".to_string())),
    }
}

/// Delete a FAQ.
///
/// # Access Control
/// - `Admin` - Only admins can edit FAQs
#[utoipa::path(
    delete,
    path = "/api/faqs/{id}",
    tag = FAQ_TAG,
    params(("id" = i32, Path, description = "FAQ ID")),
    responses(
        (status = 200, description = "FAQ deleted", body = MessageResponse),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "FAQ not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = FaqService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("FAQ not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageResponse::new("FAQ deleted"))))
}
