//! Menu item fixtures for creating in-memory test data.

use entity::menu_item;

/// Default test menu item title.
pub const DEFAULT_TITLE: &str = "Test Item";

/// Default base price of fixture menu items.
pub const DEFAULT_BASE_PRICE: i64 = 50_000;

/// Creates a menu item model with id 1 on menu 1 at [`DEFAULT_BASE_PRICE`].
pub fn entity() -> menu_item::Model {
    entity_builder().build()
}

/// Creates a menu item builder with default values for customization.
pub fn entity_builder() -> MenuItemEntityBuilder {
    MenuItemEntityBuilder::default()
}

/// Builder for customized in-memory menu item models.
pub struct MenuItemEntityBuilder {
    id: i32,
    menu_id: i32,
    title: String,
    base_price: i64,
}

impl Default for MenuItemEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            menu_id: 1,
            title: DEFAULT_TITLE.to_string(),
            base_price: DEFAULT_BASE_PRICE,
        }
    }
}

impl MenuItemEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn menu_id(mut self, menu_id: i32) -> Self {
        self.menu_id = menu_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn base_price(mut self, base_price: i64) -> Self {
        self.base_price = base_price;
        self
    }

    pub fn build(self) -> menu_item::Model {
        menu_item::Model {
            id: self.id,
            menu_id: self.menu_id,
            title: self.title,
            description: None,
            base_price: self.base_price,
            image: None,
        }
    }
}
