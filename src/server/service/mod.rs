//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls with the upload store
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod contact;
pub mod faq;
pub mod gallery;
pub mod health;
pub mod menu_item;
pub mod menu_pdf;
pub mod reservation;
pub mod setting;

#[cfg(test)]
mod test;
