//! Order service: checkout and the order lifecycle.
//!
//! Checkout resolves cart lines against the catalog, groups and prices them, and
//! writes the order while consuming the cart lines, all inside one transaction.
//! Concurrent checkouts of the same cart are serialized by the cart version; a
//! checkout that loses the race fails with `OrderError::Conflict` and writes
//! nothing.
//!
//! Status changes and shipper assignment are conditional updates on the status the
//! service observed, so of two racing requests exactly one wins.

pub mod aggregate;
pub mod lifecycle;
pub mod pricing;

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        cart::CartRepository, cart_item::CartItemRepository, menu_item::MenuItemRepository,
        menu_item_option::MenuItemOptionRepository, order::OrderRepository,
        restaurant::RestaurantRepository, shipper::ShipperRepository,
    },
    error::{auth::AuthError, order::OrderError, AppError},
    model::{
        cart::{Cart, CartItem},
        menu::MenuItem,
        order::{
            Actor, CreateOrderFromRestaurantParam, CreateOrderFromSelectionParam,
            CreateOrderParam, Order, OrderParty, PaginatedOrders, ResolvedCartLine,
        },
        user::User,
    },
};

/// Minutes between placing an order and its promised delivery.
pub const DELIVERY_LEAD_MINUTES: i64 = 45;

/// Promised delivery time for an order placed at `order_time`.
pub fn delivery_time_for(order_time: DateTime<Utc>) -> DateTime<Utc> {
    order_time + Duration::minutes(DELIVERY_LEAD_MINUTES)
}

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order from explicitly selected lines of the user's cart.
    ///
    /// # Returns
    /// - `Ok(Order)` - Pending order with its details; the selected lines are gone
    /// - `Err(OrderError::EmptySelection)` - No line ids given
    /// - `Err(AppError::NotFound)` - No cart, or a line is not in the user's cart, or a
    ///   line references a deleted menu item or option
    /// - `Err(OrderError::MixedRestaurants)` - Lines from more than one restaurant
    /// - `Err(OrderError::RestaurantClosed)` - The restaurant is not accepting orders
    /// - `Err(OrderError::Conflict)` - A concurrent checkout consumed the cart first
    pub async fn create_from_selection(
        &self,
        param: CreateOrderFromSelectionParam,
    ) -> Result<Order, AppError> {
        let mut ids = param.cart_item_ids;
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Err(OrderError::EmptySelection.into());
        }

        let txn = self.db.begin().await?;

        let cart = find_cart(&txn, param.user_id).await?;
        let items = CartItemRepository::new(&txn)
            .get_by_cart_and_ids(cart.id, &ids)
            .await?;
        if items.len() != ids.len() {
            return Err(AppError::NotFound(
                "One or more cart items were not found in your cart".to_string(),
            ));
        }

        let lines = resolve_lines(&txn, items).await?;
        let order = place_order(&txn, &cart, param.user_id, lines, param.order_time).await?;

        txn.commit().await?;

        Ok(order)
    }

    /// Places an order from every line of the user's cart that belongs to the
    /// restaurant. Lines of other restaurants stay in the cart.
    ///
    /// # Returns
    /// - `Ok(Order)` - Pending order with its details
    /// - `Err(AppError::NotFound)` - No cart, empty cart, or a dangling menu item
    /// - `Err(OrderError::NoItemsForRestaurant)` - Nothing in the cart from that restaurant
    /// - `Err(OrderError::RestaurantClosed)` / `Err(OrderError::Conflict)` - As for
    ///   `create_from_selection`
    pub async fn create_from_restaurant(
        &self,
        param: CreateOrderFromRestaurantParam,
    ) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let cart = find_cart(&txn, param.user_id).await?;
        let items = CartItemRepository::new(&txn).get_by_cart(cart.id).await?;
        if items.is_empty() {
            return Err(AppError::NotFound("Cart is empty".to_string()));
        }

        let lines: Vec<ResolvedCartLine> = resolve_lines(&txn, items)
            .await?
            .into_iter()
            .filter(|line| line.restaurant_id == param.restaurant_id)
            .collect();
        if lines.is_empty() {
            return Err(OrderError::NoItemsForRestaurant(param.restaurant_id).into());
        }

        let order = place_order(&txn, &cart, param.user_id, lines, param.order_time).await?;

        txn.commit().await?;

        Ok(order)
    }

    /// Moves an order to `target` on behalf of `actor`.
    ///
    /// A shipper may only move orders assigned to them. Entering DELIVERED or
    /// CANCELLED also removes the order from its shipper's index. ASSIGNED is only
    /// accepted for an order that already has a shipper, so a pending order gets
    /// there through `assign_shipper`.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order in its new status
    /// - `Err(AppError::NotFound)` - No such order
    /// - `Err(OrderError::NotOrderShipper)` - Shipper actor is not the assigned shipper
    /// - `Err(OrderError::InvalidTransition)` - Target not allowed for this actor
    /// - `Err(OrderError::ShipperRequired)` - Target is ASSIGNED and no shipper is set
    /// - `Err(OrderError::Conflict)` - The status changed since it was read
    pub async fn transition_status(
        &self,
        order_id: i32,
        target: OrderStatus,
        actor: Actor,
    ) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);

        let order = order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        if let Actor::Shipper(shipper_id) = actor {
            if order.shipper_id != Some(shipper_id) {
                tracing::warn!(
                    "Shipper {} tried to update order {} assigned to {:?}",
                    shipper_id,
                    order_id,
                    order.shipper_id
                );
                return Err(OrderError::NotOrderShipper {
                    order_id,
                    shipper_id,
                }
                .into());
            }
        }

        if let Err(err) = lifecycle::check_transition(order.status, target, &actor) {
            tracing::warn!("Rejected status change for order {}: {}", order_id, err);
            return Err(err.into());
        }

        if target == OrderStatus::Assigned && order.shipper_id.is_none() {
            tracing::warn!("Order {} cannot enter ASSIGNED without a shipper", order_id);
            return Err(OrderError::ShipperRequired(order_id).into());
        }

        if !order_repo
            .update_status_if(order_id, order.status, target)
            .await?
        {
            tracing::warn!("Order {} changed status concurrently", order_id);
            return Err(OrderError::Conflict(format!(
                "Order {} was updated by another request, please retry",
                order_id
            ))
            .into());
        }

        if lifecycle::is_terminal(target) {
            if let Some(shipper_id) = order.shipper_id {
                ShipperRepository::new(&txn)
                    .remove_order(shipper_id, order_id)
                    .await?;
            }
        }

        let updated = order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        txn.commit().await?;

        tracing::info!(
            "Order {} moved from {:?} to {:?} by {:?}",
            order_id,
            order.status,
            target,
            actor
        );

        Ok(updated)
    }

    /// Assigns a pending order to an online shipper.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order in ASSIGNED with the shipper set and indexed once
    /// - `Err(AppError::NotFound)` - Order or shipper missing
    /// - `Err(OrderError::InvalidState)` - Order is not PENDING, including when a
    ///   concurrent assignment won
    /// - `Err(OrderError::ShipperUnavailable)` - Shipper is offline
    pub async fn assign_shipper(&self, order_id: i32, shipper_id: i32) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);
        let shipper_repo = ShipperRepository::new(&txn);

        let order = order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;
        let shipper = shipper_repo
            .find_by_id(shipper_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Shipper {} not found", shipper_id)))?;

        if order.status != OrderStatus::Pending {
            return Err(OrderError::InvalidState {
                expected: OrderStatus::Pending,
                actual: order.status,
            }
            .into());
        }

        if !shipper.is_online {
            return Err(OrderError::ShipperUnavailable(shipper.id).into());
        }

        if !order_repo.assign_if_pending(order_id, shipper.id).await? {
            let actual = order_repo
                .find_by_id(order_id)
                .await?
                .map(|o| o.status)
                .unwrap_or(OrderStatus::Assigned);
            return Err(OrderError::InvalidState {
                expected: OrderStatus::Pending,
                actual,
            }
            .into());
        }

        shipper_repo.add_order(shipper.id, order_id).await?;

        let updated = order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        txn.commit().await?;

        tracing::info!("Order {} assigned to shipper {}", order_id, shipper.id);

        Ok(updated)
    }

    /// Returns an order to its customer, an admin or the assigned shipper.
    pub async fn get_for_viewer(&self, order_id: i32, viewer: &User) -> Result<Order, AppError> {
        let (order, _) = self.get_with_party(order_id, viewer).await?;
        Ok(order)
    }

    /// Returns an order together with the viewer's part in it.
    ///
    /// The customer role wins over the shipper role, and both win over admin.
    ///
    /// # Returns
    /// - `Ok((Order, OrderParty))` - The viewer takes part in the order
    /// - `Err(AppError::NotFound)` - No such order
    /// - `Err(AuthError::AccessDenied)` - The viewer is not a party and not an admin
    pub async fn get_with_party(
        &self,
        order_id: i32,
        viewer: &User,
    ) -> Result<(Order, OrderParty), AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        if order.user_id == viewer.id {
            return Ok((order, OrderParty::Customer));
        }

        if let Some(assigned) = order.shipper_id {
            let shipper = ShipperRepository::new(self.db)
                .find_by_user_id(viewer.id)
                .await?;
            if shipper.is_some_and(|s| s.id == assigned) {
                return Ok((order, OrderParty::Shipper(assigned)));
            }
        }

        if viewer.admin {
            return Ok((order, OrderParty::Admin));
        }

        Err(AuthError::AccessDenied(
            viewer.id,
            format!("User attempted to access order {} they are not part of", order_id),
        )
        .into())
    }

    /// Returns the user's orders, newest first.
    pub async fn get_user_orders(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        let orders = OrderRepository::new(self.db).get_by_user(user_id).await?;
        Ok(orders)
    }

    /// Returns the orders currently in the shipper's index.
    pub async fn get_shipper_orders(&self, shipper_id: i32) -> Result<Vec<Order>, AppError> {
        let order_ids = ShipperRepository::new(self.db)
            .get_order_ids(shipper_id)
            .await?;
        let orders = OrderRepository::new(self.db).get_by_ids(&order_ids).await?;
        Ok(orders)
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedOrders, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedOrders {
            orders,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Deletes an order regardless of its status.
    pub async fn delete(&self, order_id: i32) -> Result<(), AppError> {
        if !OrderRepository::new(self.db).delete(order_id).await? {
            return Err(AppError::NotFound(format!("Order {} not found", order_id)));
        }

        tracing::info!("Order {} deleted", order_id);

        Ok(())
    }
}

async fn find_cart<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Cart, AppError> {
    CartRepository::new(db)
        .find_by_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))
}

/// Loads menu item, owning restaurant and selected options for every cart line.
pub(super) async fn resolve_lines<C: ConnectionTrait>(
    db: &C,
    items: Vec<CartItem>,
) -> Result<Vec<ResolvedCartLine>, AppError> {
    let item_repo = MenuItemRepository::new(db);
    let option_repo = MenuItemOptionRepository::new(db);
    let mut menu_items: HashMap<i32, (MenuItem, i32)> = HashMap::new();
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let (menu_item, restaurant_id) = match menu_items.get(&item.menu_item_id) {
            Some(found) => found.clone(),
            None => {
                let found = item_repo
                    .find_with_restaurant_id(item.menu_item_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Menu item {} not found", item.menu_item_id))
                    })?;
                menu_items.insert(item.menu_item_id, found.clone());
                found
            }
        };

        let options = option_repo.get_by_ids(&item.option_ids).await?;
        if options.len() != item.option_ids.len() {
            return Err(AppError::NotFound(format!(
                "An option of cart item {} no longer exists",
                item.id
            )));
        }

        lines.push(ResolvedCartLine {
            cart_item_id: item.id,
            menu_item,
            restaurant_id,
            quantity: item.quantity,
            options,
        });
    }

    Ok(lines)
}

/// Groups, prices and persists the order, then consumes the cart lines.
///
/// Must run inside the checkout transaction: on `Conflict` the order rows may
/// already be written and only a rollback removes them.
pub(super) async fn place_order<C: ConnectionTrait>(
    db: &C,
    cart: &Cart,
    user_id: i32,
    lines: Vec<ResolvedCartLine>,
    order_time: Option<DateTime<Utc>>,
) -> Result<Order, AppError> {
    let cart_item_ids: Vec<i32> = lines.iter().map(|line| line.cart_item_id).collect();

    let (restaurant_id, groups) = aggregate::aggregate(lines)?;

    let restaurant = RestaurantRepository::new(db)
        .find_by_id(restaurant_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", restaurant_id)))?;
    if !restaurant.is_open {
        return Err(OrderError::RestaurantClosed(restaurant_id).into());
    }

    let (details, total_price) = pricing::price_groups(groups);
    let order_time = order_time.unwrap_or_else(Utc::now);

    if !CartRepository::new(db)
        .bump_version(cart.id, cart.version)
        .await?
    {
        tracing::warn!("Cart {} checked out concurrently", cart.id);
        return Err(cart_conflict());
    }

    let order = OrderRepository::new(db)
        .create(CreateOrderParam {
            user_id,
            restaurant_id,
            total_price,
            order_time,
            delivery_time: delivery_time_for(order_time),
            details,
        })
        .await?;

    let removed = CartItemRepository::new(db)
        .delete_in_cart(cart.id, &cart_item_ids)
        .await?;
    if removed != cart_item_ids.len() as u64 {
        tracing::warn!(
            "Cart {} lost {} of {} selected items during checkout",
            cart.id,
            cart_item_ids.len() as u64 - removed,
            cart_item_ids.len()
        );
        return Err(cart_conflict());
    }

    tracing::info!(
        "User {} placed order {} at restaurant {} for {}",
        user_id,
        order.id,
        restaurant_id,
        total_price
    );

    Ok(order)
}

fn cart_conflict() -> AppError {
    OrderError::Conflict("Cart was modified by another request, please retry".to_string()).into()
}
