use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{cart::CartError, AppError},
    model::cart::{AddCartItemParam, MAX_LINE_QUANTITY},
    service::cart::CartService,
};

mod add_item;
mod update_item;

fn add_param(user_id: i32, menu_item_id: i32, quantity: i32, option_ids: Vec<i32>) -> AddCartItemParam {
    AddCartItemParam {
        user_id,
        menu_item_id,
        quantity,
        option_ids,
    }
}
