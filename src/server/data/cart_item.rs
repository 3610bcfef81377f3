//! Cart item data repository.
//!
//! Cart items are stored with an `option_key` column (see `model::cart::option_key`)
//! and one `cart_item_option` row per selected option. The key lets the cart service
//! find an identical line in one query when merging.

use std::collections::HashMap;

use crate::server::model::cart::{option_key, CartItem};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct CartItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a cart line and its option links.
    ///
    /// # Arguments
    /// - `cart_id` - Cart receiving the line
    /// - `menu_item_id` - Ordered menu item
    /// - `quantity` - Number of units, already validated
    /// - `option_ids` - Selected options, already validated against the menu item
    pub async fn create(
        &self,
        cart_id: i32,
        menu_item_id: i32,
        quantity: i32,
        option_ids: &[i32],
    ) -> Result<CartItem, DbErr> {
        let key = option_key(option_ids);

        let entity = entity::cart_item::ActiveModel {
            cart_id: ActiveValue::Set(cart_id),
            menu_item_id: ActiveValue::Set(menu_item_id),
            quantity: ActiveValue::Set(quantity),
            option_key: ActiveValue::Set(key),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut ids = option_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        if !ids.is_empty() {
            let links = ids.iter().map(|option_id| entity::cart_item_option::ActiveModel {
                cart_item_id: ActiveValue::Set(entity.id),
                menu_item_option_id: ActiveValue::Set(*option_id),
            });
            entity::prelude::CartItemOption::insert_many(links)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(CartItem::from_entity(entity, ids))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CartItem>, DbErr> {
        let Some(entity) = entity::prelude::CartItem::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut options = self.option_ids_for(&[entity.id]).await?;
        let option_ids = options.remove(&entity.id).unwrap_or_default();

        Ok(Some(CartItem::from_entity(entity, option_ids)))
    }

    /// Finds the line in the cart with the same menu item and option set.
    pub async fn find_by_key(
        &self,
        cart_id: i32,
        menu_item_id: i32,
        option_ids: &[i32],
    ) -> Result<Option<CartItem>, DbErr> {
        let Some(entity) = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .filter(entity::cart_item::Column::MenuItemId.eq(menu_item_id))
            .filter(entity::cart_item::Column::OptionKey.eq(option_key(option_ids)))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut options = self.option_ids_for(&[entity.id]).await?;
        let ids = options.remove(&entity.id).unwrap_or_default();

        Ok(Some(CartItem::from_entity(entity, ids)))
    }

    /// Returns every line of the cart in insertion order.
    pub async fn get_by_cart(&self, cart_id: i32) -> Result<Vec<CartItem>, DbErr> {
        let entities = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .order_by_asc(entity::cart_item::Column::Id)
            .all(self.db)
            .await?;

        self.attach_options(entities).await
    }

    /// Returns the lines of the cart whose ids are in `ids`, in insertion order.
    ///
    /// Ids that belong to another cart or do not exist are silently absent from the
    /// result; callers compare lengths to detect them.
    pub async fn get_by_cart_and_ids(
        &self,
        cart_id: i32,
        ids: &[i32],
    ) -> Result<Vec<CartItem>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .filter(entity::cart_item::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::cart_item::Column::Id)
            .all(self.db)
            .await?;

        self.attach_options(entities).await
    }

    pub async fn update_quantity(&self, id: i32, quantity: i32) -> Result<(), DbErr> {
        entity::prelude::CartItem::update_many()
            .col_expr(
                entity::cart_item::Column::Quantity,
                sea_orm::sea_query::Expr::value(quantity),
            )
            .filter(entity::cart_item::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CartItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes the given lines of the cart and returns how many rows went away.
    pub async fn delete_in_cart(&self, cart_id: i32, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .filter(entity::cart_item::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every line of the cart.
    pub async fn clear(&self, cart_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn attach_options(
        &self,
        entities: Vec<entity::cart_item::Model>,
    ) -> Result<Vec<CartItem>, DbErr> {
        let ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
        let mut options = self.option_ids_for(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let option_ids = options.remove(&e.id).unwrap_or_default();
                CartItem::from_entity(e, option_ids)
            })
            .collect())
    }

    async fn option_ids_for(&self, cart_item_ids: &[i32]) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if cart_item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::CartItemOption::find()
            .filter(entity::cart_item_option::Column::CartItemId.is_in(cart_item_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut by_item: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            by_item
                .entry(link.cart_item_id)
                .or_default()
                .push(link.menu_item_option_id);
        }

        Ok(by_item)
    }
}
