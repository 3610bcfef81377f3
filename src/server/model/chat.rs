//! Order chat domain models and parameters.
//!
//! Every message belongs to one order and records the order's customer and
//! assigned shipper, so a user/shipper conversation can be read across orders.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ChatSenderRole;

use crate::{
    model::chat::{ChatMessageDto, ChatSenderRoleDto},
    server::model::order::OrderParty,
};

/// Longest accepted message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Role a party writes under.
pub fn sender_role_of(party: OrderParty) -> ChatSenderRole {
    match party {
        OrderParty::Customer => ChatSenderRole::User,
        OrderParty::Shipper(_) => ChatSenderRole::Shipper,
        OrderParty::Admin => ChatSenderRole::Support,
    }
}

pub fn sender_role_into_dto(role: ChatSenderRole) -> ChatSenderRoleDto {
    match role {
        ChatSenderRole::User => ChatSenderRoleDto::User,
        ChatSenderRole::Shipper => ChatSenderRoleDto::Shipper,
        ChatSenderRole::Support => ChatSenderRoleDto::Support,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i32,
    pub order_id: i32,
    pub user_id: i32,
    pub shipper_id: i32,
    pub sender_role: ChatSenderRole,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn into_dto(self) -> ChatMessageDto {
        ChatMessageDto {
            id: self.id,
            order_id: self.order_id,
            user_id: self.user_id,
            shipper_id: self.shipper_id,
            sender_role: sender_role_into_dto(self.sender_role),
            message: self.message,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::chat_message::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            user_id: entity.user_id,
            shipper_id: entity.shipper_id,
            sender_role: entity.sender_role,
            message: entity.message,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}

/// A validated message ready to be stored.
#[derive(Debug, Clone)]
pub struct CreateChatMessageParam {
    pub order_id: i32,
    pub user_id: i32,
    pub shipper_id: i32,
    pub sender_role: ChatSenderRole,
    pub message: String,
}
