use chrono::{Duration, TimeZone, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{cart::CartRepository, cart_item::CartItemRepository, shipper::ShipperRepository},
    error::{auth::AuthError, order::OrderError, AppError},
    model::{
        order::{Actor, CreateOrderFromRestaurantParam, CreateOrderFromSelectionParam, OrderParty},
        user::User,
    },
    service::order::{place_order, resolve_lines, OrderService},
};

mod create_from_restaurant;
mod create_from_selection;
mod get_for_viewer;
mod transition_status;

fn selection(user_id: i32, cart_item_ids: Vec<i32>) -> CreateOrderFromSelectionParam {
    CreateOrderFromSelectionParam {
        user_id,
        cart_item_ids,
        order_time: None,
    }
}

/// Counts persisted orders and order details.
async fn order_row_counts<C: ConnectionTrait>(db: &C) -> Result<(u64, u64), AppError> {
    let orders = entity::prelude::Order::find().count(db).await?;
    let details = entity::prelude::OrderDetail::find().count(db).await?;
    Ok((orders, details))
}
