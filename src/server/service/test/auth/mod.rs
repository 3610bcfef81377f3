use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::RegisterUserParam,
    service::auth::AuthService,
};

mod login;
mod register;

fn register_param(email: &str, password: &str) -> RegisterUserParam {
    RegisterUserParam {
        email: email.to_string(),
        name: "Test User".to_string(),
        password: password.to_string(),
        phone: None,
        address: None,
    }
}
