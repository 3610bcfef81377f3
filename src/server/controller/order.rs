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
        order::{
            AssignShipperDto, CreateOrderDto, CreateRestaurantOrderDto, OrderDto,
            PaginatedOrdersDto, UpdateOrderStatusDto,
        },
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order::{
            status_from_dto, Actor, CreateOrderFromRestaurantParam, CreateOrderFromSelectionParam,
            Order,
        },
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order from selected lines of the current user's cart.
///
/// All selected lines must come from one restaurant. The consumed lines are removed
/// from the cart in the same transaction that writes the order.
///
/// # Returns
/// - `201 Created` - Pending order with delivery time 45 minutes after order time
/// - `400 Bad Request` - Empty selection, mixed restaurants or closed restaurant
/// - `404 Not Found` - A line is not in the user's cart
/// - `409 Conflict` - The cart was checked out concurrently; safe to retry
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid selection", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Cart or cart item not found", body = ErrorDto),
        (status = 409, description = "Concurrent checkout", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .create_from_selection(CreateOrderFromSelectionParam {
            user_id: user.id,
            cart_item_ids: payload.cart_item_ids,
            order_time: payload.order_time,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Place an order from every cart line of one restaurant.
///
/// Lines from other restaurants stay in the cart. Send `{}` to use the current time.
#[utoipa::path(
    post,
    path = "/api/orders/restaurant/{restaurant_id}",
    tag = ORDER_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID")
    ),
    request_body = CreateRestaurantOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "No items for restaurant or restaurant closed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Cart empty or not found", body = ErrorDto),
        (status = 409, description = "Concurrent checkout", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_restaurant_order(
    State(state): State<AppState>,
    session: Session,
    Path(restaurant_id): Path<i32>,
    Json(payload): Json<CreateRestaurantOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .create_from_restaurant(CreateOrderFromRestaurantParam {
            user_id: user.id,
            restaurant_id,
            order_time: payload.order_time,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// List the current user's orders, newest first.
#[utoipa::path(
    get,
    path = "/api/orders/me",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "The user's orders", body = Vec<OrderDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let orders = OrderService::new(&state.db).get_user_orders(user.id).await?;

    let dtos: Vec<OrderDto> = orders.into_iter().map(Order::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an order. Visible to its customer, admins and the assigned shipper.
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order details", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not view this order", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .get_for_viewer(order_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Get paginated orders of all users.
///
/// # Access Control
/// - `Admin` - Only admins can list every order
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = PaginatedOrdersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let orders = OrderService::new(&state.db)
        .get_all_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// Change an order's status using the admin transition table.
///
/// PENDING orders have no shipper, so moving one to ASSIGNED here fails with 409;
/// use `PUT /api/orders/{order_id}/shipper` to assign a shipper instead.
#[utoipa::path(
    put,
    path = "/api/orders/{order_id}/status",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Status changed", body = OrderDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed, no shipper for ASSIGNED, or concurrent update", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let order = OrderService::new(&state.db)
        .transition_status(order_id, status_from_dto(payload.status), Actor::Admin)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Assign a pending order to an online shipper.
#[utoipa::path(
    put,
    path = "/api/orders/{order_id}/shipper",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    request_body = AssignShipperDto,
    responses(
        (status = 200, description = "Shipper assigned", body = OrderDto),
        (status = 403, description = "User is not an admin or shipper is offline", body = ErrorDto),
        (status = 404, description = "Order or shipper not found", body = ErrorDto),
        (status = 409, description = "Order is not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_shipper(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
    Json(payload): Json<AssignShipperDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let order = OrderService::new(&state.db)
        .assign_shipper(order_id, payload.shipper_id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Delete an order regardless of its status.
#[utoipa::path(
    delete,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    OrderService::new(&state.db).delete(order_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
