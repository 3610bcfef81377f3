//! Data transfer objects exchanged over the HTTP API.
//!
//! DTOs carry serde and OpenAPI schema derives only; conversion to and from domain
//! models lives next to the domain types in `server::model`.

pub mod api;
pub mod cart;
pub mod category;
pub mod chat;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod shipper;
pub mod user;
