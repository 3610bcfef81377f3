//! Order data repository.
//!
//! Orders are written once by checkout together with their details and detail
//! options. Afterwards only `status` and `shipper_id` change, and only through the
//! conditional updates below so that concurrent writers cannot both succeed.

use std::collections::HashMap;

use crate::server::model::order::{CreateOrderParam, Order, OrderDetail};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending order with its details and detail options.
    ///
    /// Callers run this inside a transaction; a failure part way leaves partial rows
    /// that only the rollback removes.
    ///
    /// # Returns
    /// - `Ok(Order)` - Created order with details resolved
    /// - `Err(DbErr)` - Database error during any insert
    pub async fn create(&self, param: CreateOrderParam) -> Result<Order, DbErr> {
        let order = entity::order::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            restaurant_id: ActiveValue::Set(param.restaurant_id),
            shipper_id: ActiveValue::Set(None),
            status: ActiveValue::Set(OrderStatus::Pending),
            total_price: ActiveValue::Set(param.total_price),
            order_time: ActiveValue::Set(param.order_time),
            delivery_time: ActiveValue::Set(param.delivery_time),
            created_at: ActiveValue::Set(param.order_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut details = Vec::with_capacity(param.details.len());
        for detail_param in param.details {
            let detail = entity::order_detail::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                menu_item_id: ActiveValue::Set(detail_param.menu_item_id),
                quantity: ActiveValue::Set(detail_param.quantity),
                price: ActiveValue::Set(detail_param.price),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            let mut options = Vec::with_capacity(detail_param.options.len());
            for option in detail_param.options {
                let option = entity::order_detail_option::ActiveModel {
                    order_detail_id: ActiveValue::Set(detail.id),
                    menu_item_option_id: ActiveValue::Set(option.menu_item_option_id),
                    price_adjustment: ActiveValue::Set(option.price_adjustment),
                }
                .insert(self.db)
                .await?;
                options.push(option);
            }

            details.push(OrderDetail::from_entity(detail, options));
        }

        Ok(Order::from_entity(order, details))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.attach_details(vec![entity]).await?.pop())
    }

    /// Returns the user's orders, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::OrderTime)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        self.attach_details(entities).await
    }

    /// Returns the orders with the given ids, newest first.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Order>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Order::find()
            .filter(entity::order::Column::Id.is_in(ids.to_vec()))
            .order_by_desc(entity::order::Column::OrderTime)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        self.attach_details(entities).await
    }

    /// Returns one page of all orders, newest first, and the total order count.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .order_by_desc(entity::order::Column::OrderTime)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let orders = self.attach_details(entities).await?;

        Ok((orders, total))
    }

    /// Moves the order to `target` only if its status is still `observed`.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - The status changed since it was read, or the order is gone
    pub async fn update_status_if(
        &self,
        id: i32,
        observed: OrderStatus,
        target: OrderStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .set(entity::order::ActiveModel {
                status: ActiveValue::Set(target),
                ..Default::default()
            })
            .filter(entity::order::Column::Id.eq(id))
            .filter(entity::order::Column::Status.eq(observed))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Assigns the shipper and moves the order to ASSIGNED if it is still PENDING.
    ///
    /// # Returns
    /// - `Ok(true)` - Order assigned
    /// - `Ok(false)` - The order left PENDING before this update ran
    pub async fn assign_if_pending(&self, id: i32, shipper_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .set(entity::order::ActiveModel {
                shipper_id: ActiveValue::Set(Some(shipper_id)),
                status: ActiveValue::Set(OrderStatus::Assigned),
                ..Default::default()
            })
            .filter(entity::order::Column::Id.eq(id))
            .filter(entity::order::Column::Status.eq(OrderStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes an order; details, detail options and shipper index rows cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads details and detail options for the orders with two queries, keeping the
    /// input order.
    async fn attach_details(
        &self,
        orders: Vec<entity::order::Model>,
    ) -> Result<Vec<Order>, DbErr> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let details = entity::prelude::OrderDetail::find()
            .filter(entity::order_detail::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::order_detail::Column::Id)
            .all(self.db)
            .await?;

        let detail_ids: Vec<i32> = details.iter().map(|d| d.id).collect();
        let detail_options = if detail_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::OrderDetailOption::find()
                .filter(entity::order_detail_option::Column::OrderDetailId.is_in(detail_ids))
                .order_by_asc(entity::order_detail_option::Column::MenuItemOptionId)
                .all(self.db)
                .await?
        };

        let mut options_by_detail: HashMap<i32, Vec<entity::order_detail_option::Model>> =
            HashMap::new();
        for option in detail_options {
            options_by_detail
                .entry(option.order_detail_id)
                .or_default()
                .push(option);
        }

        let mut details_by_order: HashMap<i32, Vec<OrderDetail>> = HashMap::new();
        for detail in details {
            let options = options_by_detail.remove(&detail.id).unwrap_or_default();
            details_by_order
                .entry(detail.order_id)
                .or_default()
                .push(OrderDetail::from_entity(detail, options));
        }

        Ok(orders
            .into_iter()
            .map(|o| {
                let details = details_by_order.remove(&o.id).unwrap_or_default();
                Order::from_entity(o, details)
            })
            .collect())
    }
}
