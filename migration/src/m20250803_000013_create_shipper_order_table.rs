use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250803_000009_create_shipper_table::Shipper, m20250803_000010_create_order_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShipperOrder::Table)
                    .if_not_exists()
                    .col(integer(ShipperOrder::ShipperId))
                    .col(integer(ShipperOrder::OrderId))
                    .primary_key(
                        Index::create()
                            .col(ShipperOrder::ShipperId)
                            .col(ShipperOrder::OrderId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipper_order_shipper_id")
                            .from(ShipperOrder::Table, ShipperOrder::ShipperId)
                            .to(Shipper::Table, Shipper::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipper_order_order_id")
                            .from(ShipperOrder::Table, ShipperOrder::OrderId)
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
            .drop_table(Table::drop().table(ShipperOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShipperOrder {
    Table,
    ShipperId,
    OrderId,
}
