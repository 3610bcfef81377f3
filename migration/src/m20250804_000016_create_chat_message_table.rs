use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250801_000001_create_user_table::User, m20250803_000009_create_shipper_table::Shipper,
    m20250803_000010_create_order_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatMessage::Id))
                    .col(integer(ChatMessage::OrderId))
                    .col(integer(ChatMessage::UserId))
                    .col(integer(ChatMessage::ShipperId))
                    .col(string(ChatMessage::SenderRole))
                    .col(text(ChatMessage::Message))
                    .col(boolean(ChatMessage::IsRead).default(false))
                    .col(
                        timestamp_with_time_zone(ChatMessage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_message_order_id")
                            .from(ChatMessage::Table, ChatMessage::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_message_user_id")
                            .from(ChatMessage::Table, ChatMessage::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_message_shipper_id")
                            .from(ChatMessage::Table, ChatMessage::ShipperId)
                            .to(Shipper::Table, Shipper::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chat_message_user_shipper")
                    .table(ChatMessage::Table)
                    .col(ChatMessage::UserId)
                    .col(ChatMessage::ShipperId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatMessage {
    Table,
    Id,
    OrderId,
    UserId,
    ShipperId,
    SenderRole,
    Message,
    IsRead,
    CreatedAt,
}
