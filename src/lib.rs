//! Restaurant site backend and its API client.
//!
//! - [`server`] - REST API over SQLite with admin authentication and file uploads
//! - [`client`] - Typed API client with bearer tokens and refresh-on-401
//! - [`model`] - DTOs shared by both sides

pub mod client;
pub mod model;
pub mod server;
