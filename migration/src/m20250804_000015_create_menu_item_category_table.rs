use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250801_000004_create_menu_item_table::MenuItem,
    m20250804_000014_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItemCategory::Table)
                    .if_not_exists()
                    .col(integer(MenuItemCategory::CategoryId))
                    .col(integer(MenuItemCategory::MenuItemId))
                    .primary_key(
                        Index::create()
                            .col(MenuItemCategory::CategoryId)
                            .col(MenuItemCategory::MenuItemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_category_category_id")
                            .from(MenuItemCategory::Table, MenuItemCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_category_menu_item_id")
                            .from(MenuItemCategory::Table, MenuItemCategory::MenuItemId)
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
            .drop_table(Table::drop().table(MenuItemCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItemCategory {
    Table,
    CategoryId,
    MenuItemId,
}
