//! Menus, menu items and menu item options.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        menu::MenuRepository, menu_item::MenuItemRepository,
        menu_item_option::MenuItemOptionRepository, restaurant::RestaurantRepository,
    },
    error::AppError,
    model::menu::{
        CreateMenuItemParam, CreateMenuParam, Menu, MenuItem, MenuItemOption, UpdateMenuItemParam,
        UpdateMenuParam,
    },
};

pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a menu for an existing restaurant.
    pub async fn create_menu(&self, param: CreateMenuParam) -> Result<Menu, AppError> {
        if param.title.trim().is_empty() {
            return Err(AppError::BadRequest("Menu title must not be empty".to_string()));
        }
        if RestaurantRepository::new(self.db)
            .find_by_id(param.restaurant_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Restaurant {} not found",
                param.restaurant_id
            )));
        }

        Ok(MenuRepository::new(self.db).create(param).await?)
    }

    pub async fn get_restaurant_menus(&self, restaurant_id: i32) -> Result<Vec<Menu>, AppError> {
        Ok(MenuRepository::new(self.db)
            .get_by_restaurant(restaurant_id)
            .await?)
    }

    pub async fn update_menu(&self, param: UpdateMenuParam) -> Result<Menu, AppError> {
        let id = param.id;
        MenuRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Menu {} not found", id)))
    }

    pub async fn delete_menu(&self, id: i32) -> Result<(), AppError> {
        if !MenuRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Menu {} not found", id)));
        }
        Ok(())
    }

    /// Creates a menu item on an existing menu.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty title or negative base price
    /// - `Err(AppError::NotFound)` - No such menu
    pub async fn create_item(&self, param: CreateMenuItemParam) -> Result<MenuItem, AppError> {
        validate_item(&param.title, param.base_price)?;
        if MenuRepository::new(self.db)
            .find_by_id(param.menu_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Menu {} not found", param.menu_id)));
        }

        Ok(MenuItemRepository::new(self.db).create(param).await?)
    }

    /// Returns the menu's items, each with its options.
    pub async fn get_menu_items(
        &self,
        menu_id: i32,
    ) -> Result<Vec<(MenuItem, Vec<MenuItemOption>)>, AppError> {
        let items = MenuItemRepository::new(self.db).get_by_menu(menu_id).await?;
        let option_repo = MenuItemOptionRepository::new(self.db);

        let mut result = Vec::with_capacity(items.len());
        for item in items {
            let options = option_repo.get_by_menu_item(item.id).await?;
            result.push((item, options));
        }

        Ok(result)
    }

    pub async fn get_item(&self, id: i32) -> Result<(MenuItem, Vec<MenuItemOption>), AppError> {
        let item = MenuItemRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Menu item {} not found", id)))?;
        let options = MenuItemOptionRepository::new(self.db)
            .get_by_menu_item(id)
            .await?;

        Ok((item, options))
    }

    pub async fn update_item(&self, param: UpdateMenuItemParam) -> Result<MenuItem, AppError> {
        validate_item(&param.title, param.base_price)?;

        let id = param.id;
        MenuItemRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Menu item {} not found", id)))
    }

    pub async fn delete_item(&self, id: i32) -> Result<(), AppError> {
        if !MenuItemRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Menu item {} not found", id)));
        }
        Ok(())
    }

    /// Adds an option to a menu item. Negative adjustments are accepted.
    pub async fn add_option(
        &self,
        menu_item_id: i32,
        title: String,
        price_adjustment: i64,
    ) -> Result<MenuItemOption, AppError> {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("Option title must not be empty".to_string()));
        }
        if MenuItemRepository::new(self.db)
            .find_by_id(menu_item_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Menu item {} not found",
                menu_item_id
            )));
        }

        Ok(MenuItemOptionRepository::new(self.db)
            .create(menu_item_id, title, price_adjustment)
            .await?)
    }

    pub async fn delete_option(&self, id: i32) -> Result<(), AppError> {
        if !MenuItemOptionRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Option {} not found", id)));
        }
        Ok(())
    }
}

fn validate_item(title: &str, base_price: i64) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest("Menu item title must not be empty".to_string()));
    }
    if base_price < 0 {
        return Err(AppError::BadRequest("Base price must not be negative".to_string()));
    }
    Ok(())
}
