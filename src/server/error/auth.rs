use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the request's session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks a permission required by the endpoint.
    ///
    /// # Fields
    /// - User id
    /// - Description of the denied action, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Email and password did not match a registered user.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an email that is already registered.
    #[error("Email {0} is already registered")]
    EmailTaken(String),

    /// Password hashing failed inside argon2.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed error is logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - Not logged in, stale session or bad credentials
/// - 403 Forbidden - Missing permission
/// - 409 Conflict - Email already registered
/// - 500 Internal Server Error - Hashing failure
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in".to_string())
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action".to_string(),
            ),
            Self::EmailTaken(_) => (StatusCode::CONFLICT, self.to_string()),
            Self::PasswordHash(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
