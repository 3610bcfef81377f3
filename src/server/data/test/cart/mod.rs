use crate::server::data::cart::CartRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod bump_version;
mod get_or_create;
