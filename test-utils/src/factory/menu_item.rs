//! Menu item factory for creating test menu item entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default base price of factory menu items.
pub const DEFAULT_BASE_PRICE: i64 = 50_000;

/// Factory for creating test menu items with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let pho = MenuItemFactory::new(&db, menu.id)
///     .title("Pho")
///     .base_price(50_000)
///     .build()
///     .await?;
/// ```
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    menu_id: i32,
    title: String,
    base_price: i64,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory titled `"Item {id}"` priced at
    /// [`DEFAULT_BASE_PRICE`].
    pub fn new(db: &'a DatabaseConnection, menu_id: i32) -> Self {
        Self {
            db,
            menu_id,
            title: format!("Item {}", next_id()),
            base_price: DEFAULT_BASE_PRICE,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn base_price(mut self, base_price: i64) -> Self {
        self.base_price = base_price;
        self
    }

    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        entity::menu_item::ActiveModel {
            id: ActiveValue::NotSet,
            menu_id: ActiveValue::Set(self.menu_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            base_price: ActiveValue::Set(self.base_price),
            image: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu item with default values on the given menu.
pub async fn create_menu_item(
    db: &DatabaseConnection,
    menu_id: i32,
) -> Result<entity::menu_item::Model, DbErr> {
    MenuItemFactory::new(db, menu_id).build().await
}
