use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MenuPdfDto {
    pub id: i32,
    pub title: String,
    pub filename: String,
    pub original_name: String,
    pub file_url: String,
    pub file_size: i64,
    pub is_active: bool,
    pub uploaded_at: DateTime<Utc>,
}

/// Rename and/or activate a menu PDF. Absent fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateMenuPdfDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
