//! Cart data repository.
//!
//! A user has at most one cart, created on first use. The `version` column is the
//! optimistic lock that serializes concurrent checkouts of the same cart.

use crate::server::model::cart::Cart;
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct CartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<Cart>, DbErr> {
        let entity = entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Cart::from_entity))
    }

    /// Returns the user's cart, creating an empty one if none exists yet.
    ///
    /// The insert ignores a conflict on `user_id`, so two concurrent first requests
    /// end up sharing the same cart.
    pub async fn get_or_create(&self, user_id: i32) -> Result<Cart, DbErr> {
        if let Some(cart) = self.find_by_user(user_id).await? {
            return Ok(cart);
        }

        entity::prelude::Cart::insert(entity::cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::cart::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_user(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("cart for user {}", user_id)))
    }

    /// Increments the cart version if it still equals `expected_version`.
    ///
    /// # Returns
    /// - `Ok(true)` - Version bumped; the caller owns this checkout
    /// - `Ok(false)` - Another checkout bumped the version first
    pub async fn bump_version(&self, cart_id: i32, expected_version: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Cart::update_many()
            .col_expr(
                entity::cart::Column::Version,
                sea_orm::sea_query::Expr::value(expected_version + 1),
            )
            .filter(entity::cart::Column::Id.eq(cart_id))
            .filter(entity::cart::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
