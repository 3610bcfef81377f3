use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MenuDto {
    pub id: i32,
    pub restaurant_id: i32,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateMenuDto {
    pub restaurant_id: i32,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateMenuDto {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MenuItemOptionDto {
    pub id: i32,
    pub menu_item_id: i32,
    pub title: String,
    pub price_adjustment: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MenuItemDto {
    pub id: i32,
    pub menu_id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Price in the smallest currency unit.
    pub base_price: i64,
    pub image: Option<String>,
    pub options: Vec<MenuItemOptionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateMenuItemDto {
    pub menu_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub base_price: i64,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateMenuItemDto {
    pub title: String,
    pub description: Option<String>,
    pub base_price: i64,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateMenuItemOptionDto {
    pub title: String,
    /// Added to the base price; negative values discount the item.
    pub price_adjustment: i64,
}
