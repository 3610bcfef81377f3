use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDetailDto, CategoryDto, UpsertCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::category::UpsertCategoryParam,
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all categories sorted by name. Public.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a category with its menu items grouped by menu. Public.
#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category with its menu items", body = CategoryDetailDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = CategoryService::new(&state.db)
        .get_detail(category_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Create a category.
///
/// # Access Control
/// - `Admin` - Only admins can manage categories
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = UpsertCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Invalid or duplicate name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db)
        .create(UpsertCategoryParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = UpsertCategoryDto,
    responses(
        (status = 200, description = "Successfully updated category", body = CategoryDto),
        (status = 400, description = "Invalid or duplicate name", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
    Json(payload): Json<UpsertCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db)
        .update(category_id, UpsertCategoryParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db).delete(category_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Put a menu item into a category.
#[utoipa::path(
    put,
    path = "/api/categories/{category_id}/items/{menu_item_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID"),
        ("menu_item_id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 204, description = "Menu item is in the category"),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category or menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_category_item(
    State(state): State<AppState>,
    session: Session,
    Path((category_id, menu_item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db)
        .add_item(category_id, menu_item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Take a menu item out of a category.
#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}/items/{menu_item_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID"),
        ("menu_item_id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 204, description = "Menu item removed from the category"),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Menu item is not in the category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_category_item(
    State(state): State<AppState>,
    session: Session,
    Path((category_id, menu_item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db)
        .remove_item(category_id, menu_item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
