//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the input of
//! a single service operation.

pub mod cart;
pub mod category;
pub mod chat;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod shipper;
pub mod user;
