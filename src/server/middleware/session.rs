//! Type-safe session management wrappers.
//!
//! `AuthSession` wraps the raw `tower_sessions::Session` and exposes only the
//! authentication state, so session keys and value types live in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Stores the id of the logged-in user and handles session lifecycle operations.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the underlying Session reference, e.g. to build an `AuthGuard`.
    pub fn inner(&self) -> &Session {
        self.session
    }

    /// Stores the user id in the session after a successful login.
    ///
    /// The session id is rotated first so a session fixed before login cannot be
    /// reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
