//! Menu item categories.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository, menu::MenuRepository, menu_item::MenuItemRepository,
        menu_item_option::MenuItemOptionRepository,
    },
    error::AppError,
    model::category::{Category, CategoryDetail, CategoryMenu, UpsertCategoryParam},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category.
    ///
    /// # Returns
    /// - `Ok(Category)` - Created category
    /// - `Err(AppError::BadRequest)` - Empty name or slug, or the name is already used
    pub async fn create(&self, param: UpsertCategoryParam) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);
        self.validate(&repo, &param, None).await?;

        let category = repo.create(param).await?;
        tracing::info!("Category {} created", category.id);

        Ok(category)
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    /// Returns a category with its menu items grouped by menu.
    ///
    /// Menus appear in order of their id; items within a menu are sorted by title.
    pub async fn get_detail(&self, id: i32) -> Result<CategoryDetail, AppError> {
        let repo = CategoryRepository::new(self.db);
        let category = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        let menu_repo = MenuRepository::new(self.db);
        let option_repo = MenuItemOptionRepository::new(self.db);
        let mut positions: HashMap<i32, usize> = HashMap::new();
        let mut menus: Vec<CategoryMenu> = Vec::new();

        for item in repo.get_items(id).await? {
            let index = match positions.get(&item.menu_id) {
                Some(&index) => index,
                None => {
                    let Some(menu) = menu_repo.find_by_id(item.menu_id).await? else {
                        continue;
                    };
                    positions.insert(menu.id, menus.len());
                    menus.push(CategoryMenu {
                        menu,
                        items: Vec::new(),
                    });
                    menus.len() - 1
                }
            };

            let options = option_repo.get_by_menu_item(item.id).await?;
            menus[index].items.push((item, options));
        }

        menus.sort_by_key(|group| group.menu.id);

        Ok(CategoryDetail { category, menus })
    }

    pub async fn update(&self, id: i32, param: UpsertCategoryParam) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);
        self.validate(&repo, &param, Some(id)).await?;

        repo.update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Deletes a category. Its menu items stay on their menus.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        tracing::info!("Category {} deleted", id);

        Ok(())
    }

    /// Puts a menu item into a category. Adding an item that is already there is a no-op.
    pub async fn add_item(&self, category_id: i32, menu_item_id: i32) -> Result<(), AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_id(category_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category {} not found",
                category_id
            )));
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

        repo.add_item(category_id, menu_item_id).await?;

        Ok(())
    }

    pub async fn remove_item(&self, category_id: i32, menu_item_id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db)
            .remove_item(category_id, menu_item_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Menu item {} is not in category {}",
                menu_item_id, category_id
            )));
        }

        Ok(())
    }

    async fn validate(
        &self,
        repo: &CategoryRepository<'_, DatabaseConnection>,
        param: &UpsertCategoryParam,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if param.name.is_empty() {
            return Err(AppError::BadRequest(
                "Category name must not be empty".to_string(),
            ));
        }
        if param.slug.is_empty() {
            return Err(AppError::BadRequest(
                "Category slug must contain a letter or digit".to_string(),
            ));
        }
        if repo.name_taken(&param.name, exclude_id).await? {
            return Err(AppError::BadRequest(format!(
                "Category {} already exists",
                param.name
            )));
        }

        Ok(())
    }
}
