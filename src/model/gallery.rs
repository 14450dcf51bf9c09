use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GalleryImageDto {
    pub id: i32,
    pub url: String,
    pub alt: String,
    pub title: String,
    pub sort_order: i32,
}

/// Adds an externally hosted image by URL.
#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct CreateGalleryImageDto {
    #[validate(url(message = "A valid image URL is required"))]
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate, ToSchema)]
pub struct UpdateGalleryImageDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 1_000_000, message = "Sort order must be between 0 and 1000000"))]
    pub sort_order: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreatedGalleryImageDto {
    pub id: i32,
    pub url: String,
}
