//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They validate input, coordinate repository calls, own transaction boundaries and
//! work with domain models rather than DTOs or entity models.

pub mod auth;
pub mod cart;
pub mod category;
pub mod chat;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod shipper;
pub mod user;

#[cfg(test)]
mod test;
