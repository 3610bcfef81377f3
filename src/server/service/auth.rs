//! Account registration and password login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterUserParam, User},
    util::password::{hash_password, verify_password},
};

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The first account registered while no admin exists becomes an admin, so a
    /// fresh deployment can be bootstrapped without touching the database.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Malformed email, empty name or short password
    /// - `Err(AuthError::EmailTaken)` - Email already registered
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        if !param.email.contains('@') {
            return Err(AppError::BadRequest("Email address is invalid".to_string()));
        }
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }
        if param.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&param.email).await? {
            return Err(AuthError::EmailTaken(param.email).into());
        }

        let admin = !user_repo.admin_exists().await?;
        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                email: param.email,
                name: param.name.trim().to_string(),
                password_hash,
                phone: param.phone,
                address: param.address,
                admin,
            })
            .await?;

        if admin {
            tracing::info!("User {} registered as the first admin", user.id);
        } else {
            tracing::info!("User {} registered", user.id);
        }

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();

        let Some((user, password_hash)) = UserRepository::new(self.db)
            .find_credentials_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&password_hash, password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
