//! Restaurant data repository.

use crate::server::model::restaurant::{Restaurant, UpsertRestaurantParam};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

pub struct RestaurantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RestaurantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: UpsertRestaurantParam) -> Result<Restaurant, DbErr> {
        let entity = entity::restaurant::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            phone: ActiveValue::Set(param.phone),
            address: ActiveValue::Set(param.address),
            is_open: ActiveValue::Set(param.is_open),
            open_time: ActiveValue::Set(param.open_time),
            close_time: ActiveValue::Set(param.close_time),
            rating: ActiveValue::Set(0.0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Restaurant::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Restaurant>, DbErr> {
        let entity = entity::prelude::Restaurant::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Restaurant::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Restaurant>, DbErr> {
        let entities = entity::prelude::Restaurant::find()
            .order_by_asc(entity::restaurant::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Restaurant::from_entity).collect())
    }

    /// Replaces the editable fields of a restaurant.
    ///
    /// # Returns
    /// - `Ok(Some(Restaurant))` - Updated restaurant
    /// - `Ok(None)` - No restaurant with that id
    pub async fn update(
        &self,
        id: i32,
        param: UpsertRestaurantParam,
    ) -> Result<Option<Restaurant>, DbErr> {
        let Some(existing) = entity::prelude::Restaurant::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::restaurant::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.phone = ActiveValue::Set(param.phone);
        active.address = ActiveValue::Set(param.address);
        active.is_open = ActiveValue::Set(param.is_open);
        active.open_time = ActiveValue::Set(param.open_time);
        active.close_time = ActiveValue::Set(param.close_time);

        let entity = active.update(self.db).await?;

        Ok(Some(Restaurant::from_entity(entity)))
    }

    /// Deletes a restaurant; its menus and menu items cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Restaurant deleted
    /// - `Ok(false)` - No restaurant with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Restaurant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
