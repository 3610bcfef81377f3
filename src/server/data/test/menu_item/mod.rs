use crate::server::data::menu_item::MenuItemRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
