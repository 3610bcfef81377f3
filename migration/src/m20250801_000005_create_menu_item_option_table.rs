use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000004_create_menu_item_table::MenuItem;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItemOption::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItemOption::Id))
                    .col(integer(MenuItemOption::MenuItemId))
                    .col(string(MenuItemOption::Title))
                    .col(big_integer(MenuItemOption::PriceAdjustment).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_option_menu_item_id")
                            .from(MenuItemOption::Table, MenuItemOption::MenuItemId)
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
            .drop_table(Table::drop().table(MenuItemOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItemOption {
    Table,
    Id,
    MenuItemId,
    Title,
    PriceAdjustment,
}
