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
        restaurant::{RestaurantDto, UpsertRestaurantDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::restaurant::UpsertRestaurantParam,
        service::restaurant::RestaurantService,
        state::AppState,
    },
};

/// Tag for grouping restaurant endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

/// List all restaurants. Public.
#[utoipa::path(
    get,
    path = "/api/restaurants",
    tag = RESTAURANT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved restaurants", body = Vec<RestaurantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurants(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let restaurants = RestaurantService::new(&state.db).get_all().await?;

    let dtos: Vec<RestaurantDto> = restaurants.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a restaurant by ID. Public.
#[utoipa::path(
    get,
    path = "/api/restaurants/{restaurant_id}",
    tag = RESTAURANT_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Restaurant details", body = RestaurantDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = RestaurantService::new(&state.db)
        .get_by_id(restaurant_id)
        .await?;

    Ok((StatusCode::OK, Json(restaurant.into_dto())))
}

/// Create a restaurant.
///
/// # Access Control
/// - `Admin` - Only admins can manage restaurants
#[utoipa::path(
    post,
    path = "/api/restaurants",
    tag = RESTAURANT_TAG,
    request_body = UpsertRestaurantDto,
    responses(
        (status = 201, description = "Successfully created restaurant", body = RestaurantDto),
        (status = 400, description = "Invalid restaurant data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertRestaurantDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let restaurant = RestaurantService::new(&state.db)
        .create(UpsertRestaurantParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(restaurant.into_dto())))
}

/// Replace a restaurant's details.
#[utoipa::path(
    put,
    path = "/api/restaurants/{restaurant_id}",
    tag = RESTAURANT_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID")
    ),
    request_body = UpsertRestaurantDto,
    responses(
        (status = 200, description = "Successfully updated restaurant", body = RestaurantDto),
        (status = 400, description = "Invalid restaurant data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    session: Session,
    Path(restaurant_id): Path<i32>,
    Json(payload): Json<UpsertRestaurantDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let restaurant = RestaurantService::new(&state.db)
        .update(restaurant_id, UpsertRestaurantParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(restaurant.into_dto())))
}

/// Delete a restaurant together with its menus.
#[utoipa::path(
    delete,
    path = "/api/restaurants/{restaurant_id}",
    tag = RESTAURANT_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted restaurant"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    session: Session,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    RestaurantService::new(&state.db)
        .delete(restaurant_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
