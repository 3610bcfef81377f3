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
        order::{OrderDto, UpdateOrderStatusDto},
        shipper::{CreateShipperDto, SetOnlineDto, ShipperDto, UpdateShipperDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            order::{status_from_dto, Actor, Order},
            shipper::{CreateShipperParam, UpdateShipperParam},
        },
        service::{order::OrderService, shipper::ShipperService},
        state::AppState,
    },
};

/// Tag for grouping shipper endpoints in OpenAPI documentation
pub static SHIPPER_TAG: &str = "shipper";

/// Create a shipper profile for a user. New shippers start offline.
///
/// # Access Control
/// - `Admin` - Only admins can manage shippers
#[utoipa::path(
    post,
    path = "/api/shippers",
    tag = SHIPPER_TAG,
    request_body = CreateShipperDto,
    responses(
        (status = 201, description = "Successfully created shipper", body = ShipperDto),
        (status = 400, description = "Invalid data, duplicate phone or user already a shipper", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shipper(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateShipperDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let shipper = ShipperService::new(&state.db)
        .create(CreateShipperParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(shipper.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/shippers",
    tag = SHIPPER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved shippers", body = Vec<ShipperDto>),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shippers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let shippers = ShipperService::new(&state.db).get_all().await?;

    let dtos: Vec<ShipperDto> = shippers.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/shippers/{shipper_id}",
    tag = SHIPPER_TAG,
    params(
        ("shipper_id" = i32, Path, description = "Shipper ID")
    ),
    responses(
        (status = 200, description = "Shipper details", body = ShipperDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Shipper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shipper(
    State(state): State<AppState>,
    session: Session,
    Path(shipper_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let shipper = ShipperService::new(&state.db).get_by_id(shipper_id).await?;

    Ok((StatusCode::OK, Json(shipper.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/shippers/{shipper_id}",
    tag = SHIPPER_TAG,
    params(
        ("shipper_id" = i32, Path, description = "Shipper ID")
    ),
    request_body = UpdateShipperDto,
    responses(
        (status = 200, description = "Successfully updated shipper", body = ShipperDto),
        (status = 400, description = "Invalid data or duplicate phone", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Shipper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shipper(
    State(state): State<AppState>,
    session: Session,
    Path(shipper_id): Path<i32>,
    Json(payload): Json<UpdateShipperDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let shipper = ShipperService::new(&state.db)
        .update(UpdateShipperParam::from_dto(shipper_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(shipper.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/shippers/{shipper_id}",
    tag = SHIPPER_TAG,
    params(
        ("shipper_id" = i32, Path, description = "Shipper ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted shipper"),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Shipper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shipper(
    State(state): State<AppState>,
    session: Session,
    Path(shipper_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ShipperService::new(&state.db).delete(shipper_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Go online or offline. Only online shippers can be assigned orders.
///
/// # Access Control
/// - Shipper profile required
#[utoipa::path(
    put,
    path = "/api/shippers/me/online",
    tag = SHIPPER_TAG,
    request_body = SetOnlineDto,
    responses(
        (status = 200, description = "Availability updated", body = ShipperDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a shipper", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_online(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetOnlineDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, shipper) = AuthGuard::new(&state.db, &session)
        .require_shipper()
        .await?;

    let shipper = ShipperService::new(&state.db)
        .set_online(shipper.id, payload.is_online)
        .await?;

    Ok((StatusCode::OK, Json(shipper.into_dto())))
}

/// List the orders currently assigned to the calling shipper.
#[utoipa::path(
    get,
    path = "/api/shippers/me/orders",
    tag = SHIPPER_TAG,
    responses(
        (status = 200, description = "Assigned orders", body = Vec<OrderDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a shipper", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (_, shipper) = AuthGuard::new(&state.db, &session)
        .require_shipper()
        .await?;

    let orders = OrderService::new(&state.db)
        .get_shipper_orders(shipper.id)
        .await?;

    let dtos: Vec<OrderDto> = orders.into_iter().map(Order::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Advance one of the calling shipper's orders using the shipper transition table.
#[utoipa::path(
    put,
    path = "/api/shippers/me/orders/{order_id}/status",
    tag = SHIPPER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Status changed", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the order's shipper", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed or concurrent update", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_my_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, shipper) = AuthGuard::new(&state.db, &session)
        .require_shipper()
        .await?;

    let order = OrderService::new(&state.db)
        .transition_status(
            order_id,
            status_from_dto(payload.status),
            Actor::Shipper(shipper.id),
        )
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
