use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        cart::{AddCartItemDto, CartDto, CartItemDto, UpdateCartItemDto},
        category::{CategoryDetailDto, CategoryDto, CategoryMenuDto, UpsertCategoryDto},
        chat::{ChatMessageDto, ChatSenderRoleDto, SendChatMessageDto},
        menu::{
            CreateMenuDto, CreateMenuItemDto, CreateMenuItemOptionDto, MenuDto, MenuItemDto,
            MenuItemOptionDto, UpdateMenuDto, UpdateMenuItemDto,
        },
        order::{
            AssignShipperDto, CreateOrderDto, CreateRestaurantOrderDto, OrderDetailDto,
            OrderDetailOptionDto, OrderDto, OrderStatusDto, PaginatedOrdersDto,
            UpdateOrderStatusDto,
        },
        restaurant::{RestaurantDto, UpsertRestaurantDto},
        shipper::{CreateShipperDto, SetOnlineDto, ShipperDto, UpdateShipperDto},
        user::{LoginDto, PaginatedUsersDto, RegisterDto, SetAdminDto, UserDto},
    },
    server::{
        controller::{auth, cart, category, chat, menu, order, restaurant, shipper, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        user::get_users,
        user::set_admin,
        restaurant::get_restaurants,
        restaurant::get_restaurant,
        restaurant::create_restaurant,
        restaurant::update_restaurant,
        restaurant::delete_restaurant,
        menu::get_restaurant_menus,
        menu::create_menu,
        menu::update_menu,
        menu::delete_menu,
        menu::get_menu_items,
        menu::get_menu_item,
        menu::create_menu_item,
        menu::update_menu_item,
        menu::delete_menu_item,
        menu::create_menu_item_option,
        menu::delete_menu_item_option,
        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,
        category::add_category_item,
        category::remove_category_item,
        cart::get_cart,
        cart::clear_cart,
        cart::add_cart_item,
        cart::update_cart_item,
        cart::remove_cart_item,
        order::create_order,
        order::create_restaurant_order,
        order::get_my_orders,
        order::get_order,
        order::get_orders,
        order::update_order_status,
        order::assign_shipper,
        order::delete_order,
        shipper::create_shipper,
        shipper::get_shippers,
        shipper::get_shipper,
        shipper::update_shipper,
        shipper::delete_shipper,
        shipper::set_online,
        shipper::get_my_orders,
        shipper::update_my_order_status,
        chat::send_message,
        chat::get_order_messages,
        chat::get_conversation,
        chat::mark_message_read,
    ),
    components(
        schemas(
            ErrorDto,
            UserDto, PaginatedUsersDto, RegisterDto, LoginDto, SetAdminDto,
            RestaurantDto, UpsertRestaurantDto,
            MenuDto, CreateMenuDto, UpdateMenuDto,
            MenuItemDto, CreateMenuItemDto, UpdateMenuItemDto,
            MenuItemOptionDto, CreateMenuItemOptionDto,
            CategoryDto, CategoryDetailDto, CategoryMenuDto, UpsertCategoryDto,
            CartDto, CartItemDto, AddCartItemDto, UpdateCartItemDto,
            OrderDto, OrderDetailDto, OrderDetailOptionDto, OrderStatusDto, PaginatedOrdersDto,
            CreateOrderDto, CreateRestaurantOrderDto, UpdateOrderStatusDto, AssignShipperDto,
            ShipperDto, CreateShipperDto, UpdateShipperDto, SetOnlineDto,
            ChatMessageDto, ChatSenderRoleDto, SendChatMessageDto,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and session"),
        (name = "user", description = "User administration"),
        (name = "restaurant", description = "Restaurant catalog"),
        (name = "menu", description = "Menus, menu items and options"),
        (name = "category", description = "Menu item categories"),
        (name = "cart", description = "The caller's cart"),
        (name = "order", description = "Checkout and order lifecycle"),
        (name = "shipper", description = "Shipper profiles and deliveries"),
        (name = "chat", description = "Messages between customers and shippers")
    ),
    info(
        title = "Food Delivery API",
        description = "Cart, checkout and delivery backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/users", get(user::get_users))
        .route("/api/users/{user_id}/admin", put(user::set_admin))
        .route(
            "/api/restaurants",
            get(restaurant::get_restaurants).post(restaurant::create_restaurant),
        )
        .route(
            "/api/restaurants/{restaurant_id}",
            get(restaurant::get_restaurant)
                .put(restaurant::update_restaurant)
                .delete(restaurant::delete_restaurant),
        )
        .route(
            "/api/restaurants/{restaurant_id}/menus",
            get(menu::get_restaurant_menus),
        )
        .route("/api/menus", post(menu::create_menu))
        .route(
            "/api/menus/{menu_id}",
            put(menu::update_menu).delete(menu::delete_menu),
        )
        .route("/api/menus/{menu_id}/items", get(menu::get_menu_items))
        .route("/api/menu-items", post(menu::create_menu_item))
        .route(
            "/api/menu-items/{menu_item_id}",
            get(menu::get_menu_item)
                .put(menu::update_menu_item)
                .delete(menu::delete_menu_item),
        )
        .route(
            "/api/menu-items/{menu_item_id}/options",
            post(menu::create_menu_item_option),
        )
        .route(
            "/api/menu-item-options/{option_id}",
            delete(menu::delete_menu_item_option),
        )
        .route(
            "/api/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/api/categories/{category_id}",
            get(category::get_category)
                .put(category::update_category)
                .delete(category::delete_category),
        )
        .route(
            "/api/categories/{category_id}/items/{menu_item_id}",
            put(category::add_category_item).delete(category::remove_category_item),
        )
        .route("/api/cart", get(cart::get_cart).delete(cart::clear_cart))
        .route("/api/cart/items", post(cart::add_cart_item))
        .route(
            "/api/cart/items/{cart_item_id}",
            put(cart::update_cart_item).delete(cart::remove_cart_item),
        )
        .route(
            "/api/orders",
            get(order::get_orders).post(order::create_order),
        )
        .route(
            "/api/orders/restaurant/{restaurant_id}",
            post(order::create_restaurant_order),
        )
        .route("/api/orders/me", get(order::get_my_orders))
        .route(
            "/api/orders/{order_id}",
            get(order::get_order).delete(order::delete_order),
        )
        .route(
            "/api/orders/{order_id}/status",
            put(order::update_order_status),
        )
        .route("/api/orders/{order_id}/shipper", put(order::assign_shipper))
        .route(
            "/api/orders/{order_id}/messages",
            get(chat::get_order_messages).post(chat::send_message),
        )
        .route("/api/chats/conversation", get(chat::get_conversation))
        .route("/api/chats/{message_id}/read", put(chat::mark_message_read))
        .route(
            "/api/shippers",
            get(shipper::get_shippers).post(shipper::create_shipper),
        )
        .route("/api/shippers/me/online", put(shipper::set_online))
        .route("/api/shippers/me/orders", get(shipper::get_my_orders))
        .route(
            "/api/shippers/me/orders/{order_id}/status",
            put(shipper::update_my_order_status),
        )
        .route(
            "/api/shippers/{shipper_id}",
            get(shipper::get_shipper)
                .put(shipper::update_shipper)
                .delete(shipper::delete_shipper),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
