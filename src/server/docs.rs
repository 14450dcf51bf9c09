//! OpenAPI document served at `/api/openapi.json`.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::controller::{
    auth, contact, faq, gallery, health, menu_item, menu_pdf, reservation, setting,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bistro API", description = "Restaurant site content and reservations"),
    paths(
        health::health,
        auth::login,
        auth::refresh,
        auth::logout,
        auth::me,
        auth::change_password,
        menu_item::get_menu_items,
        menu_item::create_menu_item,
        menu_item::update_menu_item,
        menu_item::delete_menu_item,
        menu_pdf::get_menu_pdfs,
        menu_pdf::upload_menu_pdf,
        menu_pdf::update_menu_pdf,
        menu_pdf::delete_menu_pdf,
        menu_pdf::download_menu_pdf,
        gallery::get_gallery_images,
        gallery::create_gallery_image,
        gallery::update_gallery_image,
        gallery::delete_gallery_image,
        reservation::create_reservation,
        reservation::get_reservations,
        reservation::update_reservation_status,
        reservation::delete_reservation,
        setting::get_settings,
        setting::update_settings,
        faq::get_faqs,
        faq::create_faq,
        faq::update_faq,
        faq::delete_faq,
        contact::create_contact,
        contact::get_contacts,
        contact::get_contact,
        contact::update_contact_status,
        contact::delete_contact,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Admin login and token refresh"),
        (name = "menu_item", description = "Menu items"),
        (name = "menu_pdf", description = "Menu PDFs"),
        (name = "gallery", description = "Gallery images"),
        (name = "reservation", description = "Table reservations"),
        (name = "setting", description = "Site settings"),
        (name = "faq", description = "Frequently asked questions"),
        (name = "contact", description = "Contact form messages"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by admin routes.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
