//! Cart item factory for creating cart lines together with their selected options.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a cart line and its option links.
///
/// The stored option key is derived from the selected option ids the same way the
/// cart service derives it: sorted ascending and joined with `,`.
///
/// # Example
///
/// ```rust,ignore
/// let line = CartItemFactory::new(&db, cart.id, pho.id)
///     .quantity(2)
///     .options(vec![large.id])
///     .build()
///     .await?;
/// ```
pub struct CartItemFactory<'a> {
    db: &'a DatabaseConnection,
    cart_id: i32,
    menu_item_id: i32,
    quantity: i32,
    option_ids: Vec<i32>,
}

impl<'a> CartItemFactory<'a> {
    /// Creates a new factory for a quantity of 1 with no options.
    pub fn new(db: &'a DatabaseConnection, cart_id: i32, menu_item_id: i32) -> Self {
        Self {
            db,
            cart_id,
            menu_item_id,
            quantity: 1,
            option_ids: Vec::new(),
        }
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the ids of the selected menu item options.
    pub fn options(mut self, option_ids: Vec<i32>) -> Self {
        self.option_ids = option_ids;
        self
    }

    /// Inserts the cart line followed by one link row per selected option.
    pub async fn build(mut self) -> Result<entity::cart_item::Model, DbErr> {
        self.option_ids.sort_unstable();
        self.option_ids.dedup();

        let option_key = self
            .option_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let item = entity::cart_item::ActiveModel {
            id: ActiveValue::NotSet,
            cart_id: ActiveValue::Set(self.cart_id),
            menu_item_id: ActiveValue::Set(self.menu_item_id),
            quantity: ActiveValue::Set(self.quantity),
            option_key: ActiveValue::Set(option_key),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for option_id in self.option_ids {
            entity::cart_item_option::ActiveModel {
                cart_item_id: ActiveValue::Set(item.id),
                menu_item_option_id: ActiveValue::Set(option_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(item)
    }
}

/// Creates a cart line without options.
pub async fn create_cart_item(
    db: &DatabaseConnection,
    cart_id: i32,
    menu_item_id: i32,
    quantity: i32,
) -> Result<entity::cart_item::Model, DbErr> {
    CartItemFactory::new(db, cart_id, menu_item_id)
        .quantity(quantity)
        .build()
        .await
}
