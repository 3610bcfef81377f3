//! Menu item option data repository.

use crate::server::model::menu::MenuItemOption;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct MenuItemOptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuItemOptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        menu_item_id: i32,
        title: String,
        price_adjustment: i64,
    ) -> Result<MenuItemOption, DbErr> {
        let entity = entity::menu_item_option::ActiveModel {
            menu_item_id: ActiveValue::Set(menu_item_id),
            title: ActiveValue::Set(title),
            price_adjustment: ActiveValue::Set(price_adjustment),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MenuItemOption::from_entity(entity))
    }

    pub async fn get_by_menu_item(&self, menu_item_id: i32) -> Result<Vec<MenuItemOption>, DbErr> {
        let entities = entity::prelude::MenuItemOption::find()
            .filter(entity::menu_item_option::Column::MenuItemId.eq(menu_item_id))
            .order_by_asc(entity::menu_item_option::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MenuItemOption::from_entity).collect())
    }

    /// Loads the options with the given ids, ordered by id. Unknown ids are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<MenuItemOption>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::MenuItemOption::find()
            .filter(entity::menu_item_option::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::menu_item_option::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MenuItemOption::from_entity).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MenuItemOption::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
