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
        menu::{
            CreateMenuDto, CreateMenuItemDto, CreateMenuItemOptionDto, MenuDto, MenuItemDto,
            MenuItemOptionDto, UpdateMenuDto, UpdateMenuItemDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::menu::{CreateMenuItemParam, CreateMenuParam, UpdateMenuItemParam, UpdateMenuParam},
        service::menu::MenuService,
        state::AppState,
    },
};

/// Tag for grouping menu endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

/// List the menus of a restaurant. Public.
#[utoipa::path(
    get,
    path = "/api/restaurants/{restaurant_id}/menus",
    tag = MENU_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved menus", body = Vec<MenuDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_menus(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let menus = MenuService::new(&state.db)
        .get_restaurant_menus(restaurant_id)
        .await?;

    let dtos: Vec<MenuDto> = menus.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a menu for a restaurant.
///
/// # Access Control
/// - `Admin` - Only admins can manage menus
#[utoipa::path(
    post,
    path = "/api/menus",
    tag = MENU_TAG,
    request_body = CreateMenuDto,
    responses(
        (status = 201, description = "Successfully created menu", body = MenuDto),
        (status = 400, description = "Invalid menu data", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_menu(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let menu = MenuService::new(&state.db)
        .create_menu(CreateMenuParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(menu.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/menus/{menu_id}",
    tag = MENU_TAG,
    params(
        ("menu_id" = i32, Path, description = "Menu ID")
    ),
    request_body = UpdateMenuDto,
    responses(
        (status = 200, description = "Successfully updated menu", body = MenuDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_menu(
    State(state): State<AppState>,
    session: Session,
    Path(menu_id): Path<i32>,
    Json(payload): Json<UpdateMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let menu = MenuService::new(&state.db)
        .update_menu(UpdateMenuParam::from_dto(menu_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(menu.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/menus/{menu_id}",
    tag = MENU_TAG,
    params(
        ("menu_id" = i32, Path, description = "Menu ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted menu"),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_menu(
    State(state): State<AppState>,
    session: Session,
    Path(menu_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MenuService::new(&state.db).delete_menu(menu_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the items of a menu, each with its options. Public.
#[utoipa::path(
    get,
    path = "/api/menus/{menu_id}/items",
    tag = MENU_TAG,
    params(
        ("menu_id" = i32, Path, description = "Menu ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved menu items", body = Vec<MenuItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_items(
    State(state): State<AppState>,
    Path(menu_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let items = MenuService::new(&state.db).get_menu_items(menu_id).await?;

    let dtos: Vec<MenuItemDto> = items
        .into_iter()
        .map(|(item, options)| item.into_dto(options))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a menu item with its options. Public.
#[utoipa::path(
    get,
    path = "/api/menu-items/{menu_item_id}",
    tag = MENU_TAG,
    params(
        ("menu_item_id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Menu item details", body = MenuItemDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(menu_item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (item, options) = MenuService::new(&state.db).get_item(menu_item_id).await?;

    Ok((StatusCode::OK, Json(item.into_dto(options))))
}

/// Create a menu item.
///
/// # Access Control
/// - `Admin` - Only admins can manage menu items
#[utoipa::path(
    post,
    path = "/api/menu-items",
    tag = MENU_TAG,
    request_body = CreateMenuItemDto,
    responses(
        (status = 201, description = "Successfully created menu item", body = MenuItemDto),
        (status = 400, description = "Invalid menu item data", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let item = MenuService::new(&state.db)
        .create_item(CreateMenuItemParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto(Vec::new()))))
}

#[utoipa::path(
    put,
    path = "/api/menu-items/{menu_item_id}",
    tag = MENU_TAG,
    params(
        ("menu_item_id" = i32, Path, description = "Menu item ID")
    ),
    request_body = UpdateMenuItemDto,
    responses(
        (status = 200, description = "Successfully updated menu item", body = MenuItemDto),
        (status = 400, description = "Invalid menu item data", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(menu_item_id): Path<i32>,
    Json(payload): Json<UpdateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = MenuService::new(&state.db);
    service
        .update_item(UpdateMenuItemParam::from_dto(menu_item_id, payload))
        .await?;
    let (item, options) = service.get_item(menu_item_id).await?;

    Ok((StatusCode::OK, Json(item.into_dto(options))))
}

#[utoipa::path(
    delete,
    path = "/api/menu-items/{menu_item_id}",
    tag = MENU_TAG,
    params(
        ("menu_item_id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted menu item"),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(menu_item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MenuService::new(&state.db).delete_item(menu_item_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add an option to a menu item. The price adjustment may be negative.
#[utoipa::path(
    post,
    path = "/api/menu-items/{menu_item_id}/options",
    tag = MENU_TAG,
    params(
        ("menu_item_id" = i32, Path, description = "Menu item ID")
    ),
    request_body = CreateMenuItemOptionDto,
    responses(
        (status = 201, description = "Successfully created option", body = MenuItemOptionDto),
        (status = 400, description = "Invalid option data", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_menu_item_option(
    State(state): State<AppState>,
    session: Session,
    Path(menu_item_id): Path<i32>,
    Json(payload): Json<CreateMenuItemOptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let option = MenuService::new(&state.db)
        .add_option(menu_item_id, payload.title, payload.price_adjustment)
        .await?;

    Ok((StatusCode::CREATED, Json(option.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/menu-item-options/{option_id}",
    tag = MENU_TAG,
    params(
        ("option_id" = i32, Path, description = "Menu item option ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted option"),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Option not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_menu_item_option(
    State(state): State<AppState>,
    session: Session,
    Path(option_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MenuService::new(&state.db).delete_option(option_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
