//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and handlers. Domain errors
//! (`AuthError`, `CartError`, `ChatError`, `OrderError`) map themselves to status codes, while
//! infrastructure failures collapse into a logged 500 with a generic body.

pub mod auth;
pub mod cart;
pub mod chat;
pub mod config;
pub mod order;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, cart::CartError, chat::ChatError, config::ConfigError, order::OrderError,
    },
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`. Domain errors handle
/// their own response mapping; the generic string variants provide standard codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 400/401/403/409 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Cart validation error, always a 400 Bad Request.
    #[error(transparent)]
    CartErr(#[from] CartError),

    /// Chat validation error, always a 400 Bad Request.
    #[error(transparent)]
    ChatErr(#[from] ChatError),

    /// Checkout or order lifecycle error.
    ///
    /// Delegates to `OrderError::into_response()`.
    #[error(transparent)]
    OrderErr(#[from] OrderError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised by the session store setup.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged; the client only sees a generic message.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `CartErr` and `ChatErr`
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr` and `OrderErr`, delegated to the domain error
/// - 500 Internal Server Error - For every infrastructure failure
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::OrderErr(err) => err.into_response(),
            Self::CartErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::ChatErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
