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
        reservation::{
            CreateReservationDto, ReservationDto, ReservationStatus, UpdateReservationStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::reservation::ReservationFilter,
        service::reservation::ReservationService,
        state::AppState,
        util::pagination::PageQuery,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

#[derive(Deserialize, Default)]
pub struct ReservationQuery {
    pub status: Option<String>,
    /// Exact reservation date, `YYYY-MM-DD`.
    pub date: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl ReservationQuery {
    fn filter(&self) -> Result<ReservationFilter, AppError> {
        let status = match non_blank(&self.status) {
            Some(status) => Some(
                status
                    .parse::<ReservationStatus>()
                    .map_err(AppError::BadRequest)?,
            ),
            None => None,
        };

        Ok(ReservationFilter {
            status,
            date: non_blank(&self.date).map(str::to_string),
        })
    }

    fn page(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Submit a reservation request.
///
/// Public endpoint used by the reservation form. New reservations start as `pending`.
///
/// # Returns
/// - `201 Created` - Id of the reservation
/// - `400 Bad Request` - Missing name, date or guests, or invalid email
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation submitted", body = ApiResponse<IdDto>),
        (status = 400, description = "Invalid reservation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<CreateReservationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let service = ReservationService::new(&state.db);

    let reservation = service.create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Reservation submitted successfully",
            IdDto { id: reservation.id },
        )),
    ))
}

/// Get paginated reservations, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can view reservations
///
/// # Arguments
/// - `status` - Only reservations in this status
/// - `date` - Only reservations for this date
/// - `page`/`per_page` - 1-based page, default 20 per page, at most 100
///
/// # Returns
/// - `200 OK` - One page of reservations with pagination metadata
/// - `400 Bad Request` - Unknown status filter
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    params(
        ("status" = Option<ReservationStatus>, Query, description = "Filter by status"),
        ("date" = Option<String>, Query, description = "Filter by date (YYYY-MM-DD)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Reservations", body = PaginatedResponse<ReservationDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ReservationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let filter = query.filter()?;
    let (page, per_page) = query.page().resolve();

    let service = ReservationService::new(&state.db);

    let reservations = service.get_paginated(filter, page, per_page).await?;

    Ok((
        StatusCode::OK,
        Json(reservations.into_dto(|reservation| reservation.into_dto())),
    ))
}

/// Confirm or cancel a reservation.
///
/// # Access Control
/// - `Admin` - Only admins can manage reservations
///
/// # Returns
/// - `200 OK` - Updated reservation
/// - `400 Bad Request` - Unknown status
/// - `404 Not Found` - No reservation with that id
#[utoipa::path(
    patch,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateReservationStatusDto,
    responses(
        (status = 200, description = "Reservation updated", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_reservation_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateReservationStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;

    let service = ReservationService::new(&state.db);

    match service.update_status(id, payload.status).await? {
        Some(reservation) => Ok((
            StatusCode::OK,
            Json(ApiResponse::with_message(
                "Reservation updated",
                reservation.into_dto(),
            )),
        )),
        None => Err(AppError::NotFound("Reservation not found".to_string())),
    }
}

/// Delete a reservation.
///
/// # Access Control
/// - `Admin` - Only admins can manage reservations
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageResponse),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ReservationService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Reservation not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageResponse::new("Reservation deleted"))))
}
