use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::menu::MenuItemDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub icon_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body for creating a category and for replacing one.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpsertCategoryDto {
    pub name: String,
    /// Derived from the name when omitted, e.g. `"Milk Tea"` becomes `"milk-tea"`.
    pub slug: Option<String>,
    pub icon_url: Option<String>,
}

/// Items of one menu that belong to a category.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CategoryMenuDto {
    pub menu_id: i32,
    pub restaurant_id: i32,
    pub title: String,
    pub items: Vec<MenuItemDto>,
}

/// A category with its menu items grouped by menu.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CategoryDetailDto {
    #[serde(flatten)]
    pub category: CategoryDto,
    pub menus: Vec<CategoryMenuDto>,
}
