//! Test fixtures providing in-memory entity models without database insertion.
//!
//! Used by pure unit tests of cart aggregation and pricing, which operate on
//! already-loaded catalog rows.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let pho = fixture::menu_item::entity_builder().id(1).base_price(50_000).build();
//! let large = fixture::menu_item_option::entity(10, pho.id, 10_000);
//! ```

pub mod menu_item;
pub mod menu_item_option;
