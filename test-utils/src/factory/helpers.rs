//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns a process-wide unique value for building distinct test identifiers.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an open restaurant with one menu and one menu item.
///
/// # Returns
/// - `Ok((restaurant, menu, menu_item))` - Created catalog rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_menu_item_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::restaurant::Model,
        entity::menu::Model,
        entity::menu_item::Model,
    ),
    DbErr,
> {
    let restaurant = crate::factory::restaurant::create_restaurant(db).await?;
    let menu = crate::factory::menu::create_menu(db, restaurant.id).await?;
    let item = crate::factory::menu_item::create_menu_item(db, menu.id).await?;

    Ok((restaurant, menu, item))
}

/// Creates a user together with a shipper profile for that user.
///
/// # Arguments
/// - `db` - Database connection
/// - `online` - Whether the shipper is currently accepting orders
///
/// # Returns
/// - `Ok((user, shipper))` - Created user and shipper
/// - `Err(DbErr)` - Database error during creation
pub async fn create_shipper_with_user(
    db: &DatabaseConnection,
    online: bool,
) -> Result<(entity::user::Model, entity::shipper::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let shipper = crate::factory::shipper::ShipperFactory::new(db, user.id)
        .online(online)
        .build()
        .await?;

    Ok((user, shipper))
}
