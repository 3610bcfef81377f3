mod auth;
mod cart;
mod category;
mod chat;
mod order;
mod shipper;
