use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod set_admin;

fn create_param(email: &str, admin: bool) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        name: "Test User".to_string(),
        password_hash: "hash".to_string(),
        phone: None,
        address: None,
        admin,
    }
}
