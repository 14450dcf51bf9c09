//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the service boundary and transformed to DTOs at the controller boundary.

pub mod admin_user;
pub mod contact;
pub mod faq;
pub mod gallery;
pub mod menu_item;
pub mod menu_pdf;
pub mod reservation;

use crate::model::api::{PaginatedResponse, PaginationDto};

/// One page of domain models along with the total row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    /// 1-based page number.
    pub page: u64,
    pub per_page: u64,
}

impl<T> Paginated<T> {
    /// Converts every item and wraps the page in the list envelope.
    pub fn into_dto<D>(self, convert: impl Fn(T) -> D) -> PaginatedResponse<D> {
        PaginatedResponse::new(
            self.items.into_iter().map(convert).collect(),
            PaginationDto::new(self.total, self.page, self.per_page),
        )
    }
}
