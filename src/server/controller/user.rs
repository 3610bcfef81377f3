use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{PaginatedUsersDto, SetAdminDto, UserDto},
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get paginated users.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Grant or revoke admin privileges.
///
/// # Access Control
/// - `Admin` - Only admins can change admin privileges
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/admin",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = SetAdminDto,
    responses(
        (status = 200, description = "Admin flag updated", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_admin(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_admin(user_id, payload.admin)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
