use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurant::Id))
                    .col(string(Restaurant::Name))
                    .col(text_null(Restaurant::Description))
                    .col(string_null(Restaurant::Phone))
                    .col(string_null(Restaurant::Address))
                    .col(boolean(Restaurant::IsOpen).default(true))
                    .col(string_null(Restaurant::OpenTime))
                    .col(string_null(Restaurant::CloseTime))
                    .col(double(Restaurant::Rating).default(0.0))
                    .col(
                        timestamp_with_time_zone(Restaurant::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    Table,
    Id,
    Name,
    Description,
    Phone,
    Address,
    IsOpen,
    OpenTime,
    CloseTime,
    Rating,
    CreatedAt,
}
