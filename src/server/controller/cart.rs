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
        cart::{AddCartItemDto, CartDto, CartItemDto, UpdateCartItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::cart::AddCartItemParam,
        service::cart::CartService,
        state::AppState,
    },
};

/// Tag for grouping cart endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

/// Get the current user's cart, creating an empty one on first access.
#[utoipa::path(
    get,
    path = "/api/cart",
    tag = CART_TAG,
    responses(
        (status = 200, description = "The user's cart", body = CartDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (cart, items) = CartService::new(&state.db).get_cart(user.id).await?;

    Ok((StatusCode::OK, Json(cart.into_dto(items))))
}

/// Remove every line from the current user's cart.
#[utoipa::path(
    delete,
    path = "/api/cart",
    tag = CART_TAG,
    responses(
        (status = 204, description = "Cart cleared"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    CartService::new(&state.db).clear(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a menu item with options to the cart.
///
/// A line with the same menu item and option set is merged by increasing its
/// quantity.
///
/// # Returns
/// - `201 Created` - The new or merged cart line
/// - `400 Bad Request` - Quantity below 1 or option of another menu item
/// - `404 Not Found` - Menu item or option does not exist
#[utoipa::path(
    post,
    path = "/api/cart/items",
    tag = CART_TAG,
    request_body = AddCartItemDto,
    responses(
        (status = 201, description = "Cart line added or merged", body = CartItemDto),
        (status = 400, description = "Invalid quantity or option", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Menu item or option not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_cart_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let item = CartService::new(&state.db)
        .add_item(AddCartItemParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/cart/items/{cart_item_id}",
    tag = CART_TAG,
    params(
        ("cart_item_id" = i32, Path, description = "Cart item ID")
    ),
    request_body = UpdateCartItemDto,
    responses(
        (status = 200, description = "Quantity updated", body = CartItemDto),
        (status = 400, description = "Quantity below 1", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Cart item not in the user's cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    session: Session,
    Path(cart_item_id): Path<i32>,
    Json(payload): Json<UpdateCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let item = CartService::new(&state.db)
        .update_item(user.id, cart_item_id, payload.quantity)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/cart/items/{cart_item_id}",
    tag = CART_TAG,
    params(
        ("cart_item_id" = i32, Path, description = "Cart item ID")
    ),
    responses(
        (status = 204, description = "Cart line removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Cart item not in the user's cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_cart_item(
    State(state): State<AppState>,
    session: Session,
    Path(cart_item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    CartService::new(&state.db)
        .remove_item(user.id, cart_item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
