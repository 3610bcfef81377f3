use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shipper::Table)
                    .if_not_exists()
                    .col(pk_auto(Shipper::Id))
                    .col(integer_uniq(Shipper::UserId))
                    .col(string(Shipper::Name))
                    .col(string_uniq(Shipper::Phone))
                    .col(boolean(Shipper::IsOnline).default(false))
                    .col(double(Shipper::Rating).default(0.0))
                    .col(
                        timestamp_with_time_zone(Shipper::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipper_user_id")
                            .from(Shipper::Table, Shipper::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shipper::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shipper {
    Table,
    Id,
    UserId,
    Name,
    Phone,
    IsOnline,
    Rating,
    CreatedAt,
}
