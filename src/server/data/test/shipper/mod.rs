use crate::server::{data::shipper::ShipperRepository, model::shipper::CreateShipperParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod order_index;
mod phone_taken;
