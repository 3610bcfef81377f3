//! Shipper data repository, including the shipper's current-order index.
//!
//! The `shipper_order` table lists the orders a shipper is currently responsible
//! for. It is an index for the shipper's work queue, not the source of truth for
//! ownership, which is `orders.shipper_id`.

use crate::server::model::shipper::{CreateShipperParam, Shipper, UpdateShipperParam};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ShipperRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShipperRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an offline shipper profile.
    pub async fn create(&self, param: CreateShipperParam) -> Result<Shipper, DbErr> {
        let entity = entity::shipper::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(param.name),
            phone: ActiveValue::Set(param.phone),
            is_online: ActiveValue::Set(false),
            rating: ActiveValue::Set(0.0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Shipper::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Shipper>, DbErr> {
        let entity = entity::prelude::Shipper::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Shipper::from_entity))
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Shipper>, DbErr> {
        let entity = entity::prelude::Shipper::find()
            .filter(entity::shipper::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Shipper::from_entity))
    }

    /// Checks whether a shipper other than `exclude_id` already uses the phone number.
    pub async fn phone_taken(&self, phone: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Shipper::find().filter(entity::shipper::Column::Phone.eq(phone));
        if let Some(id) = exclude_id {
            query = query.filter(entity::shipper::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn get_all(&self) -> Result<Vec<Shipper>, DbErr> {
        let entities = entity::prelude::Shipper::find()
            .order_by_asc(entity::shipper::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Shipper::from_entity).collect())
    }

    pub async fn update(&self, param: UpdateShipperParam) -> Result<Option<Shipper>, DbErr> {
        let Some(existing) = entity::prelude::Shipper::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::shipper::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.phone = ActiveValue::Set(param.phone);

        let entity = active.update(self.db).await?;

        Ok(Some(Shipper::from_entity(entity)))
    }

    pub async fn set_online(&self, id: i32, is_online: bool) -> Result<(), DbErr> {
        entity::prelude::Shipper::update_many()
            .col_expr(
                entity::shipper::Column::IsOnline,
                sea_orm::sea_query::Expr::value(is_online),
            )
            .filter(entity::shipper::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a shipper; assigned orders keep their history with `shipper_id` cleared.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Shipper::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds the order to the shipper's index unless it is already there.
    pub async fn add_order(&self, shipper_id: i32, order_id: i32) -> Result<(), DbErr> {
        let existing = entity::prelude::ShipperOrder::find_by_id((shipper_id, order_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        entity::shipper_order::ActiveModel {
            shipper_id: ActiveValue::Set(shipper_id),
            order_id: ActiveValue::Set(order_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes the order from the shipper's index.
    ///
    /// # Returns
    /// - `Ok(true)` - The order was indexed and is now removed
    /// - `Ok(false)` - The order was not in the index
    pub async fn remove_order(&self, shipper_id: i32, order_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ShipperOrder::delete_many()
            .filter(entity::shipper_order::Column::ShipperId.eq(shipper_id))
            .filter(entity::shipper_order::Column::OrderId.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns the ids of the orders currently indexed under the shipper.
    pub async fn get_order_ids(&self, shipper_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::ShipperOrder::find()
            .filter(entity::shipper_order::Column::ShipperId.eq(shipper_id))
            .order_by_asc(entity::shipper_order::Column::OrderId)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.order_id).collect())
    }
}
