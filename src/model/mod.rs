//! Data transfer objects shared by the HTTP server and the API client.

pub mod api;
pub mod auth;
pub mod contact;
pub mod faq;
pub mod gallery;
pub mod health;
pub mod menu_item;
pub mod menu_pdf;
pub mod reservation;
pub mod setting;
pub mod validate;
