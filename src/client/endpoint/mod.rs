//! Endpoint groups, one per API resource.

pub mod auth;
pub mod contact;
pub mod faq;
pub mod gallery;
pub mod health;
pub mod menu_item;
pub mod menu_pdf;
pub mod reservation;
pub mod setting;

pub use auth::AuthApi;
pub use contact::{ContactApi, ContactParams};
pub use faq::FaqApi;
pub use gallery::GalleryApi;
pub use health::HealthApi;
pub use menu_item::MenuItemApi;
pub use menu_pdf::MenuPdfApi;
pub use reservation::{ReservationApi, ReservationParams};
pub use setting::SettingApi;
