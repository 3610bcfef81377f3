//! Menu item option factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an option on the given menu item with the provided price adjustment.
///
/// # Arguments
/// - `db` - Database connection
/// - `menu_item_id` - Menu item the option belongs to
/// - `price_adjustment` - Delta added to the item's base price, may be negative
///
/// # Returns
/// - `Ok(entity::menu_item_option::Model)` - Created option titled `"Option {id}"`
/// - `Err(DbErr)` - Database error during insert
pub async fn create_menu_item_option(
    db: &DatabaseConnection,
    menu_item_id: i32,
    price_adjustment: i64,
) -> Result<entity::menu_item_option::Model, DbErr> {
    entity::menu_item_option::ActiveModel {
        id: ActiveValue::NotSet,
        menu_item_id: ActiveValue::Set(menu_item_id),
        title: ActiveValue::Set(format!("Option {}", next_id())),
        price_adjustment: ActiveValue::Set(price_adjustment),
    }
    .insert(db)
    .await
}
