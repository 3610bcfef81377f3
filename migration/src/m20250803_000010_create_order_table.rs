use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250801_000001_create_user_table::User, m20250803_000009_create_shipper_table::Shipper,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(integer(Orders::UserId))
                    .col(integer(Orders::RestaurantId))
                    .col(integer_null(Orders::ShipperId))
                    .col(string(Orders::Status).default("PENDING"))
                    .col(big_integer(Orders::TotalPrice))
                    .col(timestamp_with_time_zone(Orders::OrderTime))
                    .col(timestamp_with_time_zone(Orders::DeliveryTime))
                    .col(
                        timestamp_with_time_zone(Orders::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user_id")
                            .from(Orders::Table, Orders::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_shipper_id")
                            .from(Orders::Table, Orders::ShipperId)
                            .to(Shipper::Table, Shipper::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_user_id_order_time")
                    .table(Orders::Table)
                    .col(Orders::UserId)
                    .col(Orders::OrderTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    UserId,
    RestaurantId,
    ShipperId,
    Status,
    TotalPrice,
    OrderTime,
    DeliveryTime,
    CreatedAt,
}
