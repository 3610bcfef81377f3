use thiserror::Error;

use crate::server::model::cart::MAX_LINE_QUANTITY;

/// Invalid cart modifications. All of them surface as 400 Bad Request.
#[derive(Error, Debug)]
pub enum CartError {
    #[error("Quantity must be between 1 and {max}, got {0}", max = MAX_LINE_QUANTITY)]
    InvalidQuantity(i64),

    #[error("Option {option_id} does not belong to menu item {menu_item_id}")]
    OptionNotOnMenuItem { option_id: i32, menu_item_id: i32 },
}
