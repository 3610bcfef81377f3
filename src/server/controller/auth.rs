use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::RegisterUserParam,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account and log it in.
///
/// The first account registered while no admin exists is granted admin.
///
/// # Returns
/// - `201 Created` - Account created, session holds the new user
/// - `400 Bad Request` - Invalid email, empty name or short password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .register(RegisterUserParam::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Logged in, session holds the user
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::debug!("User {} logged in", user.id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out by clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// Get the currently logged-in user.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - Nobody is logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged-in user", body = UserDto),
        (status = 404, description = "No user logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = match AuthGuard::new(&state.db, &session).require(&[]).await {
        Ok(user) => user,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
        | Err(AppError::AuthErr(AuthError::UserNotInDatabase(_))) => {
            return Err(AppError::NotFound("No user logged in".to_string()));
        }
        Err(e) => return Err(e),
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}
