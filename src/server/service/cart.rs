//! Per-user cart store.
//!
//! Adding a line that matches an existing line (same menu item, same option set)
//! increases that line's quantity instead of creating a second line.

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        cart::CartRepository, cart_item::CartItemRepository, menu_item::MenuItemRepository,
        menu_item_option::MenuItemOptionRepository,
    },
    error::{cart::CartError, AppError},
    model::cart::{is_valid_quantity, AddCartItemParam, Cart, CartItem},
};

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user's cart with its lines, creating an empty cart on first use.
    pub async fn get_cart(&self, user_id: i32) -> Result<(Cart, Vec<CartItem>), AppError> {
        let cart = CartRepository::new(self.db).get_or_create(user_id).await?;
        let items = CartItemRepository::new(self.db).get_by_cart(cart.id).await?;

        Ok((cart, items))
    }

    /// Adds a menu item with the chosen options to the user's cart.
    ///
    /// # Returns
    /// - `Ok(CartItem)` - The new line, or the existing line with the increased quantity
    /// - `Err(CartError::InvalidQuantity)` - Quantity outside `1..=MAX_LINE_QUANTITY`,
    ///   including when the merged line would exceed it
    /// - `Err(AppError::NotFound)` - Menu item or option does not exist
    /// - `Err(CartError::OptionNotOnMenuItem)` - Option belongs to another menu item
    pub async fn add_item(&self, param: AddCartItemParam) -> Result<CartItem, AppError> {
        if !is_valid_quantity(param.quantity) {
            return Err(CartError::InvalidQuantity(param.quantity.into()).into());
        }

        let mut option_ids = param.option_ids;
        option_ids.sort_unstable();
        option_ids.dedup();

        let txn = self.db.begin().await?;

        if MenuItemRepository::new(&txn)
            .find_by_id(param.menu_item_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Menu item {} not found",
                param.menu_item_id
            )));
        }

        let options = MenuItemOptionRepository::new(&txn)
            .get_by_ids(&option_ids)
            .await?;
        let found: HashSet<i32> = options.iter().map(|o| o.id).collect();
        if let Some(missing) = option_ids.iter().find(|id| !found.contains(id)) {
            return Err(AppError::NotFound(format!("Option {} not found", missing)));
        }
        if let Some(foreign) = options
            .iter()
            .find(|o| o.menu_item_id != param.menu_item_id)
        {
            return Err(CartError::OptionNotOnMenuItem {
                option_id: foreign.id,
                menu_item_id: param.menu_item_id,
            }
            .into());
        }

        let cart = CartRepository::new(&txn).get_or_create(param.user_id).await?;
        let item_repo = CartItemRepository::new(&txn);

        let item = match item_repo
            .find_by_key(cart.id, param.menu_item_id, &option_ids)
            .await?
        {
            Some(mut existing) => {
                let merged = existing
                    .quantity
                    .checked_add(param.quantity)
                    .filter(|q| is_valid_quantity(*q));
                let Some(merged) = merged else {
                    return Err(CartError::InvalidQuantity(
                        i64::from(existing.quantity) + i64::from(param.quantity),
                    )
                    .into());
                };
                existing.quantity = merged;
                item_repo
                    .update_quantity(existing.id, existing.quantity)
                    .await?;
                existing
            }
            None => {
                item_repo
                    .create(cart.id, param.menu_item_id, param.quantity, &option_ids)
                    .await?
            }
        };

        txn.commit().await?;

        Ok(item)
    }

    /// Sets the quantity of one of the user's cart lines.
    ///
    /// A line in another user's cart is reported as not found.
    pub async fn update_item(
        &self,
        user_id: i32,
        cart_item_id: i32,
        quantity: i32,
    ) -> Result<CartItem, AppError> {
        if !is_valid_quantity(quantity) {
            return Err(CartError::InvalidQuantity(quantity.into()).into());
        }

        let mut item = self.find_owned_item(user_id, cart_item_id).await?;

        CartItemRepository::new(self.db)
            .update_quantity(item.id, quantity)
            .await?;
        item.quantity = quantity;

        Ok(item)
    }

    pub async fn remove_item(&self, user_id: i32, cart_item_id: i32) -> Result<(), AppError> {
        let item = self.find_owned_item(user_id, cart_item_id).await?;

        CartItemRepository::new(self.db).delete(item.id).await?;

        Ok(())
    }

    /// Removes every line from the user's cart.
    pub async fn clear(&self, user_id: i32) -> Result<(), AppError> {
        if let Some(cart) = CartRepository::new(self.db).find_by_user(user_id).await? {
            CartItemRepository::new(self.db).clear(cart.id).await?;
        }

        Ok(())
    }

    async fn find_owned_item(&self, user_id: i32, cart_item_id: i32) -> Result<CartItem, AppError> {
        let not_found = || AppError::NotFound(format!("Cart item {} not found", cart_item_id));

        let cart = CartRepository::new(self.db)
            .find_by_user(user_id)
            .await?
            .ok_or_else(not_found)?;
        let item = CartItemRepository::new(self.db)
            .find_by_id(cart_item_id)
            .await?
            .ok_or_else(not_found)?;

        if item.cart_id != cart.id {
            return Err(not_found());
        }

        Ok(item)
    }
}
