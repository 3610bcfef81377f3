use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::shipper::{CreateShipperParam, UpdateShipperParam},
    service::shipper::ShipperService,
};

mod update;
