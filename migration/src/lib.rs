pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_user_table;
mod m20250801_000002_create_restaurant_table;
mod m20250801_000003_create_menu_table;
mod m20250801_000004_create_menu_item_table;
mod m20250801_000005_create_menu_item_option_table;
mod m20250802_000006_create_cart_table;
mod m20250802_000007_create_cart_item_table;
mod m20250802_000008_create_cart_item_option_table;
mod m20250803_000009_create_shipper_table;
mod m20250803_000010_create_order_table;
mod m20250803_000011_create_order_detail_table;
mod m20250803_000012_create_order_detail_option_table;
mod m20250803_000013_create_shipper_order_table;
mod m20250804_000014_create_category_table;
mod m20250804_000015_create_menu_item_category_table;
mod m20250804_000016_create_chat_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_user_table::Migration),
            Box::new(m20250801_000002_create_restaurant_table::Migration),
            Box::new(m20250801_000003_create_menu_table::Migration),
            Box::new(m20250801_000004_create_menu_item_table::Migration),
            Box::new(m20250801_000005_create_menu_item_option_table::Migration),
            Box::new(m20250802_000006_create_cart_table::Migration),
            Box::new(m20250802_000007_create_cart_item_table::Migration),
            Box::new(m20250802_000008_create_cart_item_option_table::Migration),
            Box::new(m20250803_000009_create_shipper_table::Migration),
            Box::new(m20250803_000010_create_order_table::Migration),
            Box::new(m20250803_000011_create_order_detail_table::Migration),
            Box::new(m20250803_000012_create_order_detail_option_table::Migration),
            Box::new(m20250803_000013_create_shipper_order_table::Migration),
            Box::new(m20250804_000014_create_category_table::Migration),
            Box::new(m20250804_000015_create_menu_item_category_table::Migration),
            Box::new(m20250804_000016_create_chat_message_table::Migration),
        ]
    }
}
