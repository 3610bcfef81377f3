//! Order factory for creating orders directly in a given lifecycle state.
//!
//! Bypasses checkout, so it is meant for lifecycle and assignment tests where the
//! order contents do not matter.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db, user.id, restaurant.id)
///     .assigned_to(shipper.id)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    restaurant_id: i32,
    shipper_id: Option<i32>,
    status: OrderStatus,
    total_price: i64,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory for a pending, unassigned order totalling 100000.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, restaurant_id: i32) -> Self {
        Self {
            db,
            user_id,
            restaurant_id,
            shipper_id: None,
            status: OrderStatus::Pending,
            total_price: 100_000,
        }
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn total_price(mut self, total_price: i64) -> Self {
        self.total_price = total_price;
        self
    }

    /// Marks the order as assigned to the shipper and indexes it under that shipper.
    pub fn assigned_to(mut self, shipper_id: i32) -> Self {
        self.shipper_id = Some(shipper_id);
        self.status = OrderStatus::Assigned;
        self
    }

    /// Inserts the order, plus the shipper index row when a shipper is set and the
    /// status is not terminal.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        let order = entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            shipper_id: ActiveValue::Set(self.shipper_id),
            status: ActiveValue::Set(self.status),
            total_price: ActiveValue::Set(self.total_price),
            order_time: ActiveValue::Set(now),
            delivery_time: ActiveValue::Set(now + Duration::minutes(45)),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        let terminal = matches!(self.status, OrderStatus::Delivered | OrderStatus::Cancelled);
        if let (Some(shipper_id), false) = (self.shipper_id, terminal) {
            entity::shipper_order::ActiveModel {
                shipper_id: ActiveValue::Set(shipper_id),
                order_id: ActiveValue::Set(order.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}

/// Creates a pending order for the given user and restaurant.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    restaurant_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id, restaurant_id).build().await
}
