use crate::server::{data::chat_message::ChatMessageRepository, model::chat::CreateChatMessageParam};
use entity::sea_orm_active_enums::ChatSenderRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn message(
    order: &entity::order::Model,
    shipper_id: i32,
    sender_role: ChatSenderRole,
    text: &str,
) -> CreateChatMessageParam {
    CreateChatMessageParam {
        order_id: order.id,
        user_id: order.user_id,
        shipper_id,
        sender_role,
        message: text.to_string(),
    }
}
