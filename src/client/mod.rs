//! Typed HTTP client for the bistro API.
//!
//! [`ApiClient`] attaches the stored bearer token to every request and, when the
//! server answers 401 while a refresh token is available, exchanges it for a new
//! access token and replays the request once. Concurrent 401s wait on a single
//! refresh instead of each issuing their own.
//!
//! Endpoints are grouped per resource and reached through accessors on the
//! client, e.g. `client.reservations().get_all(&params)`.

pub mod api;
pub mod endpoint;
pub mod error;
pub mod token;

#[cfg(test)]
mod test;

pub use api::ApiClient;
pub use error::ApiError;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
