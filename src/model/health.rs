use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub database: String,
    pub timestamp: DateTime<Utc>,
}
