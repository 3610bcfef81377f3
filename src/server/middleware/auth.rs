//! Access control for request handlers.
//!
//! `AuthGuard` resolves the session's user from the database and checks the
//! requested permissions before a handler touches any data.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{shipper::ShipperRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{shipper::Shipper, user::User},
};

pub enum Permission {
    /// User must have the admin flag.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user holding every listed permission.
    ///
    /// An empty permission list only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::UserNotInSession)` - No user in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin action without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Requires a logged-in user with a shipper profile.
    ///
    /// # Returns
    /// - `Ok((User, Shipper))` - The user and their shipper profile
    /// - `Err(AuthError::AccessDenied)` - The user is not a shipper
    /// - Any error of `require(&[])`
    pub async fn require_shipper(&self) -> Result<(User, Shipper), AppError> {
        let user = self.require(&[]).await?;

        let Some(shipper) = ShipperRepository::new(self.db)
            .find_by_user_id(user.id)
            .await?
        else {
            return Err(AuthError::AccessDenied(
                user.id,
                "User attempted a shipper action without a shipper profile".to_string(),
            )
            .into());
        };

        Ok((user, shipper))
    }
}
