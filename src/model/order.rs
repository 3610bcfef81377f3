use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order lifecycle status as exposed over the API.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatusDto {
    Pending,
    Assigned,
    Delivering,
    Delivered,
    Cancelled,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct OrderDetailOptionDto {
    pub menu_item_option_id: i32,
    pub price_adjustment: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct OrderDetailDto {
    pub id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    /// Price of the whole group at order time.
    pub price: i64,
    pub options: Vec<OrderDetailOptionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub restaurant_id: i32,
    pub shipper_id: Option<i32>,
    pub status: OrderStatusDto,
    pub total_price: i64,
    pub order_time: DateTime<Utc>,
    pub delivery_time: DateTime<Utc>,
    pub details: Vec<OrderDetailDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaginatedOrdersDto {
    pub orders: Vec<OrderDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateOrderDto {
    pub cart_item_ids: Vec<i32>,
    /// Defaults to the time the request is handled.
    pub order_time: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateRestaurantOrderDto {
    pub order_time: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatusDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AssignShipperDto {
    pub shipper_id: i32,
}
