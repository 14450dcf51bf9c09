//! SeaORM entities for the restaurant site database.

pub mod prelude;

pub mod admin_user;
pub mod contact;
pub mod faq;
pub mod gallery_image;
pub mod menu_item;
pub mod menu_pdf;
pub mod refresh_token;
pub mod reservation;
pub mod setting;
