//! Order status state machine.
//!
//! DELIVERED and CANCELLED are terminal. Admins and shippers follow separate tables:
//!
//! | from       | admin                 | shipper     |
//! |------------|-----------------------|-------------|
//! | PENDING    | ASSIGNED, CANCELLED   | -           |
//! | ASSIGNED   | DELIVERING, CANCELLED | DELIVERING  |
//! | DELIVERING | DELIVERED             | DELIVERED   |
//! | DELIVERED  | -                     | -           |
//! | CANCELLED  | -                     | -           |

use entity::sea_orm_active_enums::OrderStatus;

use crate::server::{error::order::OrderError, model::order::Actor};

/// Statuses the actor may move an order to from `from`.
pub fn allowed_transitions(from: OrderStatus, actor: &Actor) -> &'static [OrderStatus] {
    match actor {
        Actor::Admin => match from {
            OrderStatus::Pending => &[OrderStatus::Assigned, OrderStatus::Cancelled],
            OrderStatus::Assigned => &[OrderStatus::Delivering, OrderStatus::Cancelled],
            OrderStatus::Delivering => &[OrderStatus::Delivered],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        },
        Actor::Shipper(_) => match from {
            OrderStatus::Assigned => &[OrderStatus::Delivering],
            OrderStatus::Delivering => &[OrderStatus::Delivered],
            OrderStatus::Pending | OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        },
    }
}

pub fn is_terminal(status: OrderStatus) -> bool {
    matches!(status, OrderStatus::Delivered | OrderStatus::Cancelled)
}

/// Validates a transition against the actor's table.
///
/// # Returns
/// - `Ok(())` - `to` is reachable from `from` for this actor
/// - `Err(OrderError::InvalidTransition)` - Otherwise
pub fn check_transition(from: OrderStatus, to: OrderStatus, actor: &Actor) -> Result<(), OrderError> {
    if allowed_transitions(from, actor).contains(&to) {
        Ok(())
    } else {
        Err(OrderError::InvalidTransition { from, to })
    }
}
