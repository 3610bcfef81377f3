//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` function
//! for quick default creation. Factories insert rows immediately, so tables must be
//! created first (see `TestBuilder::with_order_tables()`).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let (restaurant, menu, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
//!
//! let cart = factory::create_cart(db, user.id).await?;
//! let line = factory::cart_item::CartItemFactory::new(db, cart.id, item.id)
//!     .quantity(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Customers and admins
//! - `restaurant`, `menu`, `menu_item`, `menu_item_option` - Catalog rows
//! - `category` - Menu item categories
//! - `cart`, `cart_item` - A user's cart and its lines with selected options
//! - `shipper` - Shipper profiles linked to a user
//! - `order` - Orders in any lifecycle state
//! - `helpers` - Id generation and multi-entity shortcuts

pub mod cart;
pub mod cart_item;
pub mod category;
pub mod helpers;
pub mod menu;
pub mod menu_item;
pub mod menu_item_option;
pub mod order;
pub mod restaurant;
pub mod shipper;
pub mod user;

pub use cart::create_cart;
pub use cart_item::create_cart_item;
pub use category::create_category;
pub use menu::create_menu;
pub use menu_item::create_menu_item;
pub use menu_item_option::create_menu_item_option;
pub use order::create_order;
pub use restaurant::create_restaurant;
pub use shipper::create_shipper;
pub use user::create_user;
