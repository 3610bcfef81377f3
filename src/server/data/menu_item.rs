//! Menu item data repository.

use crate::server::model::menu::{CreateMenuItemParam, MenuItem, UpdateMenuItemParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct MenuItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateMenuItemParam) -> Result<MenuItem, DbErr> {
        let entity = entity::menu_item::ActiveModel {
            menu_id: ActiveValue::Set(param.menu_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            base_price: ActiveValue::Set(param.base_price),
            image: ActiveValue::Set(param.image),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MenuItem::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, DbErr> {
        let entity = entity::prelude::MenuItem::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MenuItem::from_entity))
    }

    /// Finds a menu item together with the id of the restaurant owning its menu.
    ///
    /// # Returns
    /// - `Ok(Some((MenuItem, restaurant_id)))` - Item and owning restaurant
    /// - `Ok(None)` - Item missing, or its menu no longer exists
    pub async fn find_with_restaurant_id(
        &self,
        id: i32,
    ) -> Result<Option<(MenuItem, i32)>, DbErr> {
        let Some((item, menu)) = entity::prelude::MenuItem::find_by_id(id)
            .find_also_related(entity::prelude::Menu)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(menu.map(|menu| (MenuItem::from_entity(item), menu.restaurant_id)))
    }

    pub async fn get_by_menu(&self, menu_id: i32) -> Result<Vec<MenuItem>, DbErr> {
        let entities = entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::MenuId.eq(menu_id))
            .order_by_asc(entity::menu_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MenuItem::from_entity).collect())
    }

    pub async fn update(&self, param: UpdateMenuItemParam) -> Result<Option<MenuItem>, DbErr> {
        let Some(existing) = entity::prelude::MenuItem::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::menu_item::ActiveModel = existing.into();
        active.title = ActiveValue::Set(param.title);
        active.description = ActiveValue::Set(param.description);
        active.base_price = ActiveValue::Set(param.base_price);
        active.image = ActiveValue::Set(param.image);

        let entity = active.update(self.db).await?;

        Ok(Some(MenuItem::from_entity(entity)))
    }

    /// Deletes a menu item; its options and any cart lines pointing at it cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MenuItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
