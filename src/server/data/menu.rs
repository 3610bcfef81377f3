//! Menu data repository.

use crate::server::model::menu::{CreateMenuParam, Menu, UpdateMenuParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct MenuRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateMenuParam) -> Result<Menu, DbErr> {
        let entity = entity::menu::ActiveModel {
            restaurant_id: ActiveValue::Set(param.restaurant_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Menu::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Menu>, DbErr> {
        let entity = entity::prelude::Menu::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Menu::from_entity))
    }

    pub async fn get_by_restaurant(&self, restaurant_id: i32) -> Result<Vec<Menu>, DbErr> {
        let entities = entity::prelude::Menu::find()
            .filter(entity::menu::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(entity::menu::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Menu::from_entity).collect())
    }

    pub async fn update(&self, param: UpdateMenuParam) -> Result<Option<Menu>, DbErr> {
        let Some(existing) = entity::prelude::Menu::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::menu::ActiveModel = existing.into();
        active.title = ActiveValue::Set(param.title);
        active.description = ActiveValue::Set(param.description);

        let entity = active.update(self.db).await?;

        Ok(Some(Menu::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Menu::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
