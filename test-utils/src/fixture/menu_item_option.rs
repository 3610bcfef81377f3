//! Menu item option fixtures for creating in-memory test data.

use entity::menu_item_option;

/// Creates an option model titled `"Option {id}"`.
///
/// # Arguments
/// - `id` - Option id
/// - `menu_item_id` - Menu item the option belongs to
/// - `price_adjustment` - Delta added to the base price
pub fn entity(id: i32, menu_item_id: i32, price_adjustment: i64) -> menu_item_option::Model {
    menu_item_option::Model {
        id,
        menu_item_id,
        title: format!("Option {}", id),
        price_adjustment,
    }
}
