//! HTTP request handlers.
//!
//! Controllers authenticate the request where required, convert DTOs into service
//! parameters, call the service and wrap the result in the response envelope.

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
