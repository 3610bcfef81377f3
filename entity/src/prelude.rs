pub use super::cart::Entity as Cart;
pub use super::cart_item::Entity as CartItem;
pub use super::cart_item_option::Entity as CartItemOption;
pub use super::category::Entity as Category;
pub use super::chat_message::Entity as ChatMessage;
pub use super::menu::Entity as Menu;
pub use super::menu_item::Entity as MenuItem;
pub use super::menu_item_category::Entity as MenuItemCategory;
pub use super::menu_item_option::Entity as MenuItemOption;
pub use super::order::Entity as Order;
pub use super::order_detail::Entity as OrderDetail;
pub use super::order_detail_option::Entity as OrderDetailOption;
pub use super::restaurant::Entity as Restaurant;
pub use super::shipper::Entity as Shipper;
pub use super::shipper_order::Entity as ShipperOrder;
pub use super::user::Entity as User;
