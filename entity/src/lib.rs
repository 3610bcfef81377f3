//! SeaORM entities for the food-delivery schema.
//!
//! Every table references its parents through explicit integer foreign keys.
//! Relations are declared for schema generation (foreign keys and cascades);
//! lookups across tables are done with explicit queries in the repositories.

pub mod prelude;

pub mod cart;
pub mod cart_item;
pub mod cart_item_option;
pub mod category;
pub mod chat_message;
pub mod menu;
pub mod menu_item;
pub mod menu_item_category;
pub mod menu_item_option;
pub mod order;
pub mod order_detail;
pub mod order_detail_option;
pub mod restaurant;
pub mod sea_orm_active_enums;
pub mod shipper;
pub mod shipper_order;
pub mod user;
