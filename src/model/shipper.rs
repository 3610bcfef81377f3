use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ShipperDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub phone: String,
    pub is_online: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateShipperDto {
    pub user_id: i32,
    pub name: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateShipperDto {
    pub name: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SetOnlineDto {
    pub is_online: bool,
}
