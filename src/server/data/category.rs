//! Category data repository.
//!
//! Category membership lives in `menu_item_category`; deleting a category or a
//! menu item removes its memberships through the foreign key cascade.

use crate::server::model::{
    category::{Category, UpsertCategoryParam},
    menu::MenuItem,
};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: UpsertCategoryParam) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(param.name),
            slug: ActiveValue::Set(param.slug),
            icon_url: ActiveValue::Set(param.icon_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Returns every category sorted by name.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Checks whether another category already uses `name`.
    ///
    /// # Arguments
    /// - `name` - Name to look up
    /// - `exclude_id` - Category being renamed, which may keep its own name
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Category::find().filter(entity::category::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::category::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Replaces the editable fields of a category.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - Updated category
    /// - `Ok(None)` - No category with that id
    pub async fn update(
        &self,
        id: i32,
        param: UpsertCategoryParam,
    ) -> Result<Option<Category>, DbErr> {
        let Some(existing) = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.slug = ActiveValue::Set(param.slug);
        active.icon_url = ActiveValue::Set(param.icon_url);

        let entity = active.update(self.db).await?;

        Ok(Some(Category::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds a menu item to a category. Adding it twice keeps a single membership.
    pub async fn add_item(&self, category_id: i32, menu_item_id: i32) -> Result<(), DbErr> {
        entity::prelude::MenuItemCategory::insert(entity::menu_item_category::ActiveModel {
            category_id: ActiveValue::Set(category_id),
            menu_item_id: ActiveValue::Set(menu_item_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::menu_item_category::Column::CategoryId,
                entity::menu_item_category::Column::MenuItemId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes a menu item from a category.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - The item was not in the category
    pub async fn remove_item(&self, category_id: i32, menu_item_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MenuItemCategory::delete_many()
            .filter(entity::menu_item_category::Column::CategoryId.eq(category_id))
            .filter(entity::menu_item_category::Column::MenuItemId.eq(menu_item_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns the menu items of a category sorted by title.
    pub async fn get_items(&self, category_id: i32) -> Result<Vec<MenuItem>, DbErr> {
        let item_ids: Vec<i32> = entity::prelude::MenuItemCategory::find()
            .filter(entity::menu_item_category::Column::CategoryId.eq(category_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| m.menu_item_id)
            .collect();

        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::Id.is_in(item_ids))
            .order_by_asc(entity::menu_item::Column::Title)
            .order_by_asc(entity::menu_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MenuItem::from_entity).collect())
    }
}
