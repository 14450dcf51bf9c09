//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table in the application. Repositories work with SeaORM entity models and leave the
//! conversion into domain models to the service layer. All database queries, inserts,
//! updates, and deletes are performed through these repositories.

pub mod admin_user;
pub mod contact;
pub mod faq;
pub mod gallery_image;
pub mod menu_item;
pub mod menu_pdf;
pub mod refresh_token;
pub mod reservation;
pub mod setting;

#[cfg(test)]
mod test;
