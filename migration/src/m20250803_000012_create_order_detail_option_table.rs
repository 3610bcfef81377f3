use sea_orm_migration::{prelude::*, schema::*};

use super::m20250803_000011_create_order_detail_table::OrderDetail;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderDetailOption::Table)
                    .if_not_exists()
                    .col(integer(OrderDetailOption::OrderDetailId))
                    .col(integer(OrderDetailOption::MenuItemOptionId))
                    .col(big_integer(OrderDetailOption::PriceAdjustment))
                    .primary_key(
                        Index::create()
                            .col(OrderDetailOption::OrderDetailId)
                            .col(OrderDetailOption::MenuItemOptionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_detail_option_order_detail_id")
                            .from(OrderDetailOption::Table, OrderDetailOption::OrderDetailId)
                            .to(OrderDetail::Table, OrderDetail::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderDetailOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderDetailOption {
    Table,
    OrderDetailId,
    MenuItemOptionId,
    PriceAdjustment,
}
