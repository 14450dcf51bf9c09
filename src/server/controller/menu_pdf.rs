use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderMap, StatusCode,
    },
    response::IntoResponse,
    Json,
};
use utoipa::ToSchema;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageResponse},
        menu_pdf::{MenuPdfDto, UpdateMenuPdfDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::menu_pdf::UploadMenuPdfParams,
        service::menu_pdf::MenuPdfService,
        state::AppState,
        util::multipart::MultipartForm,
    },
};

/// Tag for grouping menu PDF endpoints in OpenAPI documentation
pub static MENU_PDF_TAG: &str = "menu_pdf";

/// Multipart upload body, documentation only.
#[allow(dead_code)]
#[derive(ToSchema)]
struct MenuPdfUploadForm {
    #[schema(value_type = String, format = Binary)]
    pdf: Vec<u8>,
    title: Option<String>,
    /// `"1"` (default) activates the upload, `"0"` stores it inactive.
    set_active: Option<String>,
}

/// Get every uploaded menu PDF, newest first.
#[utoipa::path(
    get,
    path = "/api/menu",
    tag = MENU_PDF_TAG,
    responses(
        (status = 200, description = "Menu PDFs", body = ApiResponse<Vec<MenuPdfDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_pdfs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MenuPdfService::new(&state.db, &state.uploads);

    let pdfs = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            pdfs.into_iter().map(|pdf| pdf.into_dto()).collect::<Vec<_>>(),
        )),
    ))
}

/// Upload a menu PDF.
///
/// Expects a multipart form with a `pdf` file part, an optional `title` and an optional
/// `set_active` flag (`"1"` by default). When the new PDF is activated every other PDF
/// is deactivated in the same transaction.
///
/// # Access Control
/// - `Admin` - Only admins can upload menus
///
/// # Returns
/// - `201 Created` - Stored PDF
/// - `400 Bad Request` - Missing file or content is not a PDF
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `413 Payload Too Large` - File exceeds the upload limit
#[utoipa::path(
    post,
    path = "/api/menu",
    tag = MENU_PDF_TAG,
    request_body(content = MenuPdfUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Menu PDF uploaded", body = ApiResponse<MenuPdfDto>),
        (status = 400, description = "Missing or invalid PDF", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_menu_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let mut form = MultipartForm::read(multipart).await?;

    let Some(file) = form.take_file("pdf") else {
        return Err(AppError::BadRequest("No PDF file uploaded".to_string()));
    };

    let params = UploadMenuPdfParams {
        title: form.text("title").map(str::to_string),
        original_name: file.file_name,
        bytes: file.bytes,
        set_active: form
            .text("set_active")
            .map(|flag| !matches!(flag, "0" | "false"))
            .unwrap_or(true),
    };

    let service = MenuPdfService::new(&state.db, &state.uploads);

    let pdf = service.upload(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Menu PDF uploaded",
            pdf.into_dto(),
        )),
    ))
}

/// Rename and/or activate a menu PDF.
///
/// # Access Control
/// - `Admin` - Only admins can edit menus
///
/// # Returns
/// - `200 OK` - Updated PDF
/// - `404 Not Found` - No PDF with that id
#[utoipa::path(
    put,
    path = "/api/menu/{id}",
    tag = MENU_PDF_TAG,
    params(("id" = i32, Path, description = "Menu PDF ID")),
    request_body = UpdateMenuPdfDto,
    responses(
        (status = 200, description = "Menu PDF updated", body = ApiResponse<MenuPdfDto>),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Menu PDF not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_menu_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateMenuPdfDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;

    let service = MenuPdfService::new(&state.db, &state.uploads);

    match service.update(id, payload.into()).await? {
        Some(pdf) => Ok((
            StatusCode::OK,
            Json(ApiResponse::with_message("Menu PDF updated", pdf.into_dto())),
        )),
        None => Err(AppError::NotFound("Menu PDF not found".to_string())),
    }
}

/// Delete a menu PDF and its stored file.
///
/// # Access Control
/// - `Admin` - Only admins can edit menus
#[utoipa::path(
    delete,
    path = "/api/menu/{id}",
    tag = MENU_PDF_TAG,
    params(("id" = i32, Path, description = "Menu PDF ID")),
    responses(
        (status = 200, description = "Menu PDF deleted", body = MessageResponse),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Menu PDF not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_menu_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = MenuPdfService::new(&state.db, &state.uploads);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Menu PDF not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageResponse::new("Menu PDF deleted"))))
}

/// Download the active menu PDF as an attachment.
///
/// # Returns
/// - `200 OK` - PDF bytes with `Content-Disposition: attachment`
/// - `404 Not Found` - No PDF is active
#[utoipa::path(
    get,
    path = "/api/menu/download",
    tag = MENU_PDF_TAG,
    responses(
        (status = 200, description = "Active menu PDF", content_type = "application/pdf"),
        (status = 404, description = "No active menu", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_menu_pdf(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MenuPdfService::new(&state.db, &state.uploads);

    let Some((pdf, bytes)) = service.read_active().await? else {
        return Err(AppError::NotFound("No active menu available".to_string()));
    };

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (
                CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    attachment_name(&pdf.original_name)
                ),
            ),
        ],
        bytes,
    ))
}

/// Header-safe download name; falls back to `menu.pdf`.
fn attachment_name(original_name: &str) -> String {
    let name: String = original_name
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .filter(|c| !matches!(c, '"' | '\\' | '/'))
        .collect();
    let name = name.trim();

    if name.is_empty() {
        "menu.pdf".to_string()
    } else {
        name.to_string()
    }
}
