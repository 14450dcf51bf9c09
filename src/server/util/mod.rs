//! Small helpers shared by the service and controller layers.

pub mod jwt;
pub mod multipart;
pub mod pagination;
pub mod password;
pub mod token;
pub mod upload;
