use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CartItemDto {
    pub id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub option_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CartDto {
    pub id: i32,
    pub items: Vec<CartItemDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AddCartItemDto {
    pub menu_item_id: i32,
    pub quantity: i32,
    #[serde(default)]
    pub option_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateCartItemDto {
    pub quantity: i32,
}
