use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250801_000004_create_menu_item_table::MenuItem,
    m20250802_000006_create_cart_table::Cart,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartItem::Table)
                    .if_not_exists()
                    .col(pk_auto(CartItem::Id))
                    .col(integer(CartItem::CartId))
                    .col(integer(CartItem::MenuItemId))
                    .col(integer(CartItem::Quantity))
                    .col(string(CartItem::OptionKey).default(""))
                    .col(
                        timestamp_with_time_zone(CartItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_cart_id")
                            .from(CartItem::Table, CartItem::CartId)
                            .to(Cart::Table, Cart::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_menu_item_id")
                            .from(CartItem::Table, CartItem::MenuItemId)
                            .to(MenuItem::Table, MenuItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartItem {
    Table,
    Id,
    CartId,
    MenuItemId,
    Quantity,
    OptionKey,
    CreatedAt,
}
