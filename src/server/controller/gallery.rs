use axum::{
    extract::{rejection::JsonRejection, FromRequest, Multipart, Path, Request, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageResponse},
        gallery::{
            CreateGalleryImageDto, CreatedGalleryImageDto, GalleryImageDto, UpdateGalleryImageDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::gallery::GalleryService,
        state::AppState,
        util::multipart::MultipartForm,
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

/// Multipart upload body, documentation only.
#[allow(dead_code)]
#[derive(ToSchema)]
struct GalleryUploadForm {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
    alt: Option<String>,
    title: Option<String>,
}

/// Get every gallery image in display order.
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    responses(
        (status = 200, description = "Gallery images", body = ApiResponse<Vec<GalleryImageDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery_images(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = GalleryService::new(&state.db, &state.uploads);

    let images = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            images
                .into_iter()
                .map(|image| image.into_dto())
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Add a gallery image.
///
/// Accepts either a JSON body linking an externally hosted image or a multipart form
/// with an `image` file part and optional `alt` and `title` fields. The request's
/// `Content-Type` decides which. New images are placed after the last one.
///
/// # Access Control
/// - `Admin` - Only admins can edit the gallery
///
/// # Returns
/// - `201 Created` - Id and URL of the new image
/// - `400 Bad Request` - Invalid URL, missing file, or file is not an image
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `413 Payload Too Large` - File exceeds the upload limit
#[utoipa::path(
    post,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    request_body(
        content(
            (CreateGalleryImageDto = "application/json"),
            (GalleryUploadForm = "multipart/form-data")
        ),
        description = "JSON `{url, alt?, title?}` or multipart `image` file with optional `alt`, `title`"
    ),
    responses(
        (status = 201, description = "Image added", body = ApiResponse<CreatedGalleryImageDto>),
        (status = 400, description = "Invalid image", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_gallery_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = GalleryService::new(&state.db, &state.uploads);

    let image = if is_multipart(&headers) {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let mut form = MultipartForm::read(multipart).await?;

        let Some(file) = form.take_file("image") else {
            return Err(AppError::BadRequest("No image file uploaded".to_string()));
        };
        let alt = form.text("alt").unwrap_or_default().to_string();
        let title = form.text("title").unwrap_or_default().to_string();

        service.upload(file, alt, title).await?
    } else {
        let Json(payload): Json<CreateGalleryImageDto> =
            Json::from_request(request, &state).await?;
        payload.validate()?;

        service.create(payload.into()).await?
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Image added",
            CreatedGalleryImageDto {
                id: image.id,
                url: image.url,
            },
        )),
    ))
}

/// Update an image's alt text, title or position.
///
/// # Access Control
/// - `Admin` - Only admins can edit the gallery
#[utoipa::path(
    put,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(("id" = i32, Path, description = "Gallery image ID")),
    request_body = UpdateGalleryImageDto,
    responses(
        (status = 200, description = "Image updated", body = ApiResponse<GalleryImageDto>),
        (status = 400, description = "Malformed body or sort order out of range", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_gallery_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateGalleryImageDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    payload.validate()?;

    let service = GalleryService::new(&state.db, &state.uploads);

    match service.update(id, payload.into()).await? {
        Some(image) => Ok((
            StatusCode::OK,
            Json(ApiResponse::with_message("Image updated", image.into_dto())),
        )),
        None => Err(AppError::NotFound("Image not found".to_string())),
    }
}

/// Delete a gallery image, removing its file when it was uploaded.
///
/// # Access Control
/// - `Admin` - Only admins can edit the gallery
#[utoipa::path(
    delete,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(("id" = i32, Path, description = "Gallery image ID")),
    responses(
        (status = 200, description = "Image deleted", body = MessageResponse),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_gallery_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = GalleryService::new(&state.db, &state.uploads);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Image not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageResponse::new("Image deleted"))))
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}
