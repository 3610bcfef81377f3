//! Menu factory for creating test menu entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menus belonging to a restaurant.
pub struct MenuFactory<'a> {
    db: &'a DatabaseConnection,
    restaurant_id: i32,
    title: String,
}

impl<'a> MenuFactory<'a> {
    /// Creates a new MenuFactory titled `"Menu {id}"`.
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32) -> Self {
        Self {
            db,
            restaurant_id,
            title: format!("Menu {}", next_id()),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub async fn build(self) -> Result<entity::menu::Model, DbErr> {
        entity::menu::ActiveModel {
            id: ActiveValue::NotSet,
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu with default values for the given restaurant.
pub async fn create_menu(
    db: &DatabaseConnection,
    restaurant_id: i32,
) -> Result<entity::menu::Model, DbErr> {
    MenuFactory::new(db, restaurant_id).build().await
}
