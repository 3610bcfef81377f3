//! Order domain models, checkout intermediates and parameters.
//!
//! Checkout turns cart lines into [`ResolvedCartLine`]s, groups them into
//! [`LineGroup`]s, prices each group and persists the result as a
//! [`CreateOrderParam`]. A persisted order is read back as [`Order`] with its
//! details attached.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::OrderStatus;

use crate::{
    model::order::{
        OrderDetailDto, OrderDetailOptionDto, OrderDto, OrderStatusDto, PaginatedOrdersDto,
    },
    server::model::menu::{MenuItem, MenuItemOption},
};

/// Who is driving a status change. Each actor has its own transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Admin,
    /// Shipper profile id of the acting shipper.
    Shipper(i32),
}

/// How a user takes part in an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderParty {
    Customer,
    /// Assigned shipper, by shipper profile id.
    Shipper(i32),
    /// Admin who is neither the customer nor the assigned shipper.
    Admin,
}

pub fn status_into_dto(status: OrderStatus) -> OrderStatusDto {
    match status {
        OrderStatus::Pending => OrderStatusDto::Pending,
        OrderStatus::Assigned => OrderStatusDto::Assigned,
        OrderStatus::Delivering => OrderStatusDto::Delivering,
        OrderStatus::Delivered => OrderStatusDto::Delivered,
        OrderStatus::Cancelled => OrderStatusDto::Cancelled,
    }
}

pub fn status_from_dto(status: OrderStatusDto) -> OrderStatus {
    match status {
        OrderStatusDto::Pending => OrderStatus::Pending,
        OrderStatusDto::Assigned => OrderStatus::Assigned,
        OrderStatusDto::Delivering => OrderStatus::Delivering,
        OrderStatusDto::Delivered => OrderStatus::Delivered,
        OrderStatusDto::Cancelled => OrderStatus::Cancelled,
    }
}

/// Persisted order with its details resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub restaurant_id: i32,
    pub shipper_id: Option<i32>,
    pub status: OrderStatus,
    pub total_price: i64,
    pub order_time: DateTime<Utc>,
    pub delivery_time: DateTime<Utc>,
    pub details: Vec<OrderDetail>,
}

impl Order {
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            restaurant_id: self.restaurant_id,
            shipper_id: self.shipper_id,
            status: status_into_dto(self.status),
            total_price: self.total_price,
            order_time: self.order_time,
            delivery_time: self.delivery_time,
            details: self.details.into_iter().map(OrderDetail::into_dto).collect(),
        }
    }

    /// Converts an order row and its already-converted details.
    pub fn from_entity(entity: entity::order::Model, details: Vec<OrderDetail>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            restaurant_id: entity.restaurant_id,
            shipper_id: entity.shipper_id,
            status: entity.status,
            total_price: entity.total_price,
            order_time: entity.order_time,
            delivery_time: entity.delivery_time,
            details,
        }
    }
}

/// One priced group of identical cart lines, frozen at order time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub price: i64,
    pub options: Vec<OrderDetailOption>,
}

impl OrderDetail {
    pub fn into_dto(self) -> OrderDetailDto {
        OrderDetailDto {
            id: self.id,
            menu_item_id: self.menu_item_id,
            quantity: self.quantity,
            price: self.price,
            options: self
                .options
                .into_iter()
                .map(|o| OrderDetailOptionDto {
                    menu_item_option_id: o.menu_item_option_id,
                    price_adjustment: o.price_adjustment,
                })
                .collect(),
        }
    }

    pub fn from_entity(
        entity: entity::order_detail::Model,
        options: Vec<entity::order_detail_option::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            menu_item_id: entity.menu_item_id,
            quantity: entity.quantity,
            price: entity.price,
            options: options
                .into_iter()
                .map(|o| OrderDetailOption {
                    menu_item_option_id: o.menu_item_option_id,
                    price_adjustment: o.price_adjustment,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetailOption {
    pub menu_item_option_id: i32,
    /// Adjustment copied from the option when the order was placed.
    pub price_adjustment: i64,
}

/// Cart line with its menu item, owning restaurant and options loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCartLine {
    pub cart_item_id: i32,
    pub menu_item: MenuItem,
    pub restaurant_id: i32,
    pub quantity: i32,
    pub options: Vec<MenuItemOption>,
}

/// Cart lines sharing a menu item and option set, with their quantities summed.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGroup {
    pub menu_item: MenuItem,
    pub options: Vec<MenuItemOption>,
    pub quantity: i32,
}

/// Fully priced order ready to be inserted.
#[derive(Debug, Clone)]
pub struct CreateOrderParam {
    pub user_id: i32,
    pub restaurant_id: i32,
    pub total_price: i64,
    pub order_time: DateTime<Utc>,
    pub delivery_time: DateTime<Utc>,
    pub details: Vec<CreateOrderDetailParam>,
}

#[derive(Debug, Clone)]
pub struct CreateOrderDetailParam {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub price: i64,
    pub options: Vec<OrderDetailOption>,
}

/// Checkout of explicitly selected cart lines.
#[derive(Debug, Clone)]
pub struct CreateOrderFromSelectionParam {
    pub user_id: i32,
    pub cart_item_ids: Vec<i32>,
    /// Defaults to now.
    pub order_time: Option<DateTime<Utc>>,
}

/// Checkout of every cart line belonging to one restaurant.
#[derive(Debug, Clone)]
pub struct CreateOrderFromRestaurantParam {
    pub user_id: i32,
    pub restaurant_id: i32,
    pub order_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOrders {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            orders: self.orders.into_iter().map(Order::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
