use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000003_create_menu_table::Menu;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(integer(MenuItem::MenuId))
                    .col(string(MenuItem::Title))
                    .col(text_null(MenuItem::Description))
                    .col(big_integer(MenuItem::BasePrice))
                    .col(string_null(MenuItem::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_menu_id")
                            .from(MenuItem::Table, MenuItem::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    Table,
    Id,
    MenuId,
    Title,
    Description,
    BasePrice,
    Image,
}
