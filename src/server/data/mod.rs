//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. Every repository is generic over
//! `ConnectionTrait`, so the same repository works on the pooled connection and
//! inside a `DatabaseTransaction` when a service needs several writes to commit
//! together.

pub mod cart;
pub mod cart_item;
pub mod category;
pub mod chat_message;
pub mod menu;
pub mod menu_item;
pub mod menu_item_option;
pub mod order;
pub mod restaurant;
pub mod shipper;
pub mod user;
