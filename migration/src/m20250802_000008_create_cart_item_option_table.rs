use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250801_000005_create_menu_item_option_table::MenuItemOption,
    m20250802_000007_create_cart_item_table::CartItem,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartItemOption::Table)
                    .if_not_exists()
                    .col(integer(CartItemOption::CartItemId))
                    .col(integer(CartItemOption::MenuItemOptionId))
                    .primary_key(
                        Index::create()
                            .col(CartItemOption::CartItemId)
                            .col(CartItemOption::MenuItemOptionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_option_cart_item_id")
                            .from(CartItemOption::Table, CartItemOption::CartItemId)
                            .to(CartItem::Table, CartItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_option_menu_item_option_id")
                            .from(CartItemOption::Table, CartItemOption::MenuItemOptionId)
                            .to(MenuItemOption::Table, MenuItemOption::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartItemOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartItemOption {
    Table,
    CartItemId,
    MenuItemOptionId,
}
