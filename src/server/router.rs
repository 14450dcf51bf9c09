use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    model::api::ErrorDto,
    server::{
        config::Config,
        controller::{
            auth::{change_password, login, logout, me, refresh},
            contact::{
                create_contact, delete_contact, get_contact, get_contacts, update_contact_status,
            },
            faq::{create_faq, delete_faq, get_faqs, update_faq},
            gallery::{
                create_gallery_image, delete_gallery_image, get_gallery_images,
                update_gallery_image,
            },
            health::health,
            menu_item::{create_menu_item, delete_menu_item, get_menu_items, update_menu_item},
            menu_pdf::{
                delete_menu_pdf, download_menu_pdf, get_menu_pdfs, update_menu_pdf,
                upload_menu_pdf,
            },
            reservation::{
                create_reservation, delete_reservation, get_reservations,
                update_reservation_status,
            },
            setting::{get_settings, update_settings},
        },
        docs::ApiDoc,
        state::AppState,
        util::upload::UPLOADS_ROUTE,
    },
};

/// API routes without state, layers or static file serving.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/openapi.json", get(openapi))
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh", post(refresh))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
        .route("/api/auth/change-password", post(change_password))
        .route("/api/menu", get(get_menu_pdfs).post(upload_menu_pdf))
        .route("/api/menu/download", get(download_menu_pdf))
        .route("/api/menu/items", get(get_menu_items).post(create_menu_item))
        .route(
            "/api/menu/items/{id}",
            put(update_menu_item).delete(delete_menu_item),
        )
        .route("/api/menu/{id}", put(update_menu_pdf).delete(delete_menu_pdf))
        .route(
            "/api/gallery",
            get(get_gallery_images).post(create_gallery_image),
        )
        .route(
            "/api/gallery/{id}",
            put(update_gallery_image).delete(delete_gallery_image),
        )
        .route(
            "/api/reservations",
            get(get_reservations).post(create_reservation),
        )
        .route(
            "/api/reservations/{id}",
            axum::routing::patch(update_reservation_status).delete(delete_reservation),
        )
        .route("/api/settings", get(get_settings).put(update_settings))
        .route("/api/faqs", get(get_faqs).post(create_faq))
        .route("/api/faqs/{id}", put(update_faq).delete(delete_faq))
        .route("/api/contacts", get(get_contacts).post(create_contact))
        .route(
            "/api/contacts/{id}",
            get(get_contact)
                .patch(update_contact_status)
                .delete(delete_contact),
        )
}

/// Builds the complete application: API routes, uploaded files, the optional
/// frontend, and the tower-http layers.
pub fn app(state: AppState, config: &Config) -> Router {
    let mut app = router().nest_service(UPLOADS_ROUTE, ServeDir::new(state.uploads.root()));

    app = match &config.static_dir {
        Some(dir) => app.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => app.fallback(not_found),
    };

    app.layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorDto::new("Not found")))
}
