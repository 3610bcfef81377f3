use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::OrderStatus;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of checkout and of the order lifecycle.
///
/// Validation failures map to 400, lifecycle violations and lost races to 409, and
/// shipper eligibility problems to 403. Missing records use `AppError::NotFound`.
#[derive(Error, Debug)]
pub enum OrderError {
    /// Checkout was requested with no cart items.
    #[error("No cart items selected for checkout")]
    EmptySelection,

    /// The selected cart items resolve to more than one restaurant.
    #[error("Selected cart items belong to more than one restaurant")]
    MixedRestaurants,

    /// The cart holds no items from the requested restaurant.
    #[error("Cart has no items from restaurant {0}")]
    NoItemsForRestaurant(i32),

    /// Lines of one menu item add up to more units than an order can hold.
    #[error("Quantity of menu item {0} is too large")]
    QuantityOverflow(i32),

    /// The restaurant is not accepting orders.
    #[error("Restaurant {0} is closed")]
    RestaurantClosed(i32),

    /// The target status is not reachable from the current one for this actor.
    #[error("Cannot change order status from {from:?} to {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The operation requires the order to be in a specific status.
    #[error("Order is {actual:?}, expected {expected:?}")]
    InvalidState {
        expected: OrderStatus,
        actual: OrderStatus,
    },

    /// A concurrent request changed the cart or order first. Safe to retry.
    #[error("{0}")]
    Conflict(String),

    /// ASSIGNED was requested for an order that has no shipper yet.
    #[error("Order {0} has no shipper; assign one through the shipper assignment route")]
    ShipperRequired(i32),

    /// The shipper is offline and cannot take orders.
    #[error("Shipper {0} is not online")]
    ShipperUnavailable(i32),

    /// The acting shipper is not the one assigned to the order.
    #[error("Order {order_id} is not assigned to shipper {shipper_id}")]
    NotOrderShipper { order_id: i32, shipper_id: i32 },
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::EmptySelection
            | Self::MixedRestaurants
            | Self::NoItemsForRestaurant(_)
            | Self::QuantityOverflow(_)
            | Self::RestaurantClosed(_) => StatusCode::BAD_REQUEST,
            Self::InvalidTransition { .. }
            | Self::InvalidState { .. }
            | Self::Conflict(_)
            | Self::ShipperRequired(_) => StatusCode::CONFLICT,
            Self::ShipperUnavailable(_) | Self::NotOrderShipper { .. } => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
