//! Cart domain models.
//!
//! A cart line is identified by its menu item plus the set of selected options. Two
//! lines with the same menu item and the same options are the same line, which the
//! `option_key` column makes cheap to look up.

use crate::model::cart::{AddCartItemDto, CartDto, CartItemDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: i32,
    pub user_id: i32,
    /// Incremented by every successful checkout.
    pub version: i32,
}

impl Cart {
    pub fn into_dto(self, items: Vec<CartItem>) -> CartDto {
        CartDto {
            id: self.id,
            items: items.into_iter().map(CartItem::into_dto).collect(),
        }
    }

    pub fn from_entity(entity: entity::cart::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            version: entity.version,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: i32,
    pub cart_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    /// Selected option ids, sorted ascending.
    pub option_ids: Vec<i32>,
}

impl CartItem {
    pub fn into_dto(self) -> CartItemDto {
        CartItemDto {
            id: self.id,
            menu_item_id: self.menu_item_id,
            quantity: self.quantity,
            option_ids: self.option_ids,
        }
    }

    /// Builds the domain model from a cart item row and its option links.
    pub fn from_entity(entity: entity::cart_item::Model, mut option_ids: Vec<i32>) -> Self {
        option_ids.sort_unstable();

        Self {
            id: entity.id,
            cart_id: entity.cart_id,
            menu_item_id: entity.menu_item_id,
            quantity: entity.quantity,
            option_ids,
        }
    }
}

/// Parameters for adding a menu item to the caller's cart.
#[derive(Debug, Clone)]
pub struct AddCartItemParam {
    pub user_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub option_ids: Vec<i32>,
}

impl AddCartItemParam {
    pub fn from_dto(user_id: i32, dto: AddCartItemDto) -> Self {
        Self {
            user_id,
            menu_item_id: dto.menu_item_id,
            quantity: dto.quantity,
            option_ids: dto.option_ids,
        }
    }
}

/// Canonical identity of a set of selected options.
///
/// Ids are sorted and de-duplicated, then joined with `,`. Selecting no options
/// yields the empty string.
/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: i32 = 100;

/// Whether `quantity` is allowed on a cart line.
pub fn is_valid_quantity(quantity: i32) -> bool {
    (1..=MAX_LINE_QUANTITY).contains(&quantity)
}

pub fn option_key(option_ids: &[i32]) -> String {
    let mut ids = option_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
