use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_open: bool,
    /// Opening time as displayed to customers, e.g. `"08:00"`.
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

/// Body for creating a restaurant and, field for field, for replacing one.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpsertRestaurantDto {
    pub name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default = "default_is_open")]
    pub is_open: bool,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
}

fn default_is_open() -> bool {
    true
}
