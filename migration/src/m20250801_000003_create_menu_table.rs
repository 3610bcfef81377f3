use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000002_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(pk_auto(Menu::Id))
                    .col(integer(Menu::RestaurantId))
                    .col(string(Menu::Title))
                    .col(text_null(Menu::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_restaurant_id")
                            .from(Menu::Table, Menu::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Menu {
    Table,
    Id,
    RestaurantId,
    Title,
    Description,
}
