//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into service parameters,
//! call a single service and convert the result back into a DTO.

pub mod auth;
pub mod cart;
pub mod category;
pub mod chat;
pub mod menu;
pub mod order;
pub mod param;
pub mod restaurant;
pub mod shipper;
pub mod user;
