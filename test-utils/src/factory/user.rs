//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored as the password hash of factory users.
///
/// It is not a valid PHC string, so password verification always fails for these
/// users. Tests that log in register through the auth service instead.
pub const UNUSABLE_PASSWORD_HASH: &str = "!";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db)
///     .email("admin@example.com")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: String,
    password_hash: String,
    admin: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - password_hash: [`UNUSABLE_PASSWORD_HASH`]
    /// - admin: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            password_hash: UNUSABLE_PASSWORD_HASH.to_string(),
            admin: false,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            password_hash: ActiveValue::Set(self.password_hash),
            admin: ActiveValue::Set(self.admin),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-admin user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
