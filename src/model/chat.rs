use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Who wrote a chat message. Admins write as `SUPPORT`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatSenderRoleDto {
    User,
    Shipper,
    Support,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ChatMessageDto {
    pub id: i32,
    pub order_id: i32,
    pub user_id: i32,
    pub shipper_id: i32,
    pub sender_role: ChatSenderRoleDto,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SendChatMessageDto {
    pub message: String,
}
