//! Category factory for creating test categories and their memberships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    menu_item_ids: Vec<i32>,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Category {id}"`
    /// - slug: `"category-{id}"`
    /// - no menu items
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Category {}", id),
            slug: format!("category-{}", id),
            menu_item_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Menu items linked to the category after it is inserted.
    pub fn menu_items(mut self, menu_item_ids: Vec<i32>) -> Self {
        self.menu_item_ids = menu_item_ids;
        self
    }

    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        let category = entity::category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            icon_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for menu_item_id in self.menu_item_ids {
            entity::menu_item_category::ActiveModel {
                category_id: ActiveValue::Set(category.id),
                menu_item_id: ActiveValue::Set(menu_item_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(category)
    }
}

/// Creates a category with default values and no menu items.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
