//! Chat message data repository.
//!
//! Messages are always returned oldest first; ties on `created_at` fall back to
//! insertion order.

use crate::server::model::chat::{ChatMessage, CreateChatMessageParam};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Select,
};

pub struct ChatMessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChatMessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateChatMessageParam) -> Result<ChatMessage, DbErr> {
        let entity = entity::chat_message::ActiveModel {
            order_id: ActiveValue::Set(param.order_id),
            user_id: ActiveValue::Set(param.user_id),
            shipper_id: ActiveValue::Set(param.shipper_id),
            sender_role: ActiveValue::Set(param.sender_role),
            message: ActiveValue::Set(param.message),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ChatMessage::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ChatMessage>, DbErr> {
        let entity = entity::prelude::ChatMessage::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ChatMessage::from_entity))
    }

    pub async fn get_by_order(&self, order_id: i32) -> Result<Vec<ChatMessage>, DbErr> {
        let entities = oldest_first(
            entity::prelude::ChatMessage::find()
                .filter(entity::chat_message::Column::OrderId.eq(order_id)),
        )
        .all(self.db)
        .await?;

        Ok(entities.into_iter().map(ChatMessage::from_entity).collect())
    }

    /// Returns every message between a customer and a shipper, across orders.
    pub async fn get_conversation(
        &self,
        user_id: i32,
        shipper_id: i32,
    ) -> Result<Vec<ChatMessage>, DbErr> {
        let entities = oldest_first(
            entity::prelude::ChatMessage::find()
                .filter(entity::chat_message::Column::UserId.eq(user_id))
                .filter(entity::chat_message::Column::ShipperId.eq(shipper_id)),
        )
        .all(self.db)
        .await?;

        Ok(entities.into_iter().map(ChatMessage::from_entity).collect())
    }

    /// Flags a message as read.
    ///
    /// # Returns
    /// - `Ok(true)` - Message exists and is now read
    /// - `Ok(false)` - No message with that id
    pub async fn mark_read(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ChatMessage::update_many()
            .col_expr(entity::chat_message::Column::IsRead, Expr::value(true))
            .filter(entity::chat_message::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn oldest_first(
    query: Select<entity::prelude::ChatMessage>,
) -> Select<entity::prelude::ChatMessage> {
    query
        .order_by_asc(entity::chat_message::Column::CreatedAt)
        .order_by_asc(entity::chat_message::Column::Id)
}
