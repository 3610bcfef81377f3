use sea_orm_migration::{prelude::*, schema::*};

use super::m20250803_000010_create_order_table::Orders;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderDetail::Id))
                    .col(integer(OrderDetail::OrderId))
                    .col(integer(OrderDetail::MenuItemId))
                    .col(integer(OrderDetail::Quantity))
                    .col(big_integer(OrderDetail::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_detail_order_id")
                            .from(OrderDetail::Table, OrderDetail::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderDetail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderDetail {
    Table,
    Id,
    OrderId,
    MenuItemId,
    Quantity,
    Price,
}
