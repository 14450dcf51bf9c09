use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MenuItemDto {
    pub id: i32,
    pub category: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

/// Body of both create and update requests; updates replace every field.
#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct SaveMenuItemDto {
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "Price is required"))]
    pub price: String,
}
