//! Chat between an order's customer and its shipper.
//!
//! Only the parties of an order take part in its chat: the customer, the
//! assigned shipper and admins, who write as support. A message can only be
//! sent once the order has a shipper.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{chat_message::ChatMessageRepository, shipper::ShipperRepository},
    error::{auth::AuthError, chat::ChatError, AppError},
    model::{
        chat::{sender_role_of, ChatMessage, CreateChatMessageParam, MAX_MESSAGE_CHARS},
        user::User,
    },
    service::order::OrderService,
};

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a message about an order on behalf of `sender`.
    ///
    /// The message is trimmed before it is validated and stored.
    ///
    /// # Returns
    /// - `Ok(ChatMessage)` - Stored message, unread
    /// - `Err(AppError::NotFound)` - No such order
    /// - `Err(AuthError::AccessDenied)` - Sender is not a party of the order
    /// - `Err(ChatError::EmptyMessage)` / `Err(ChatError::MessageTooLong)` - Invalid text
    /// - `Err(ChatError::NoShipper)` - The order has no shipper yet
    pub async fn send(
        &self,
        order_id: i32,
        sender: &User,
        message: &str,
    ) -> Result<ChatMessage, AppError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage.into());
        }
        let chars = message.chars().count();
        if chars > MAX_MESSAGE_CHARS {
            return Err(ChatError::MessageTooLong(chars).into());
        }

        let (order, party) = OrderService::new(self.db)
            .get_with_party(order_id, sender)
            .await?;
        let Some(shipper_id) = order.shipper_id else {
            return Err(ChatError::NoShipper(order_id).into());
        };

        let message = ChatMessageRepository::new(self.db)
            .create(CreateChatMessageParam {
                order_id,
                user_id: order.user_id,
                shipper_id,
                sender_role: sender_role_of(party),
                message: message.to_string(),
            })
            .await?;

        tracing::info!(
            "User {} sent message {} on order {} as {:?}",
            sender.id,
            message.id,
            order_id,
            message.sender_role
        );

        Ok(message)
    }

    /// Returns the messages of an order, oldest first.
    pub async fn get_by_order(
        &self,
        order_id: i32,
        viewer: &User,
    ) -> Result<Vec<ChatMessage>, AppError> {
        OrderService::new(self.db)
            .get_with_party(order_id, viewer)
            .await?;

        Ok(ChatMessageRepository::new(self.db)
            .get_by_order(order_id)
            .await?)
    }

    /// Returns every message between a customer and a shipper, oldest first.
    ///
    /// Readable by that customer, that shipper and admins.
    pub async fn get_conversation(
        &self,
        user_id: i32,
        shipper_id: i32,
        viewer: &User,
    ) -> Result<Vec<ChatMessage>, AppError> {
        if !viewer.admin && viewer.id != user_id {
            let shipper = ShipperRepository::new(self.db)
                .find_by_user_id(viewer.id)
                .await?;
            if !shipper.is_some_and(|s| s.id == shipper_id) {
                return Err(AuthError::AccessDenied(
                    viewer.id,
                    format!(
                        "User attempted to read conversation of user {} and shipper {}",
                        user_id, shipper_id
                    ),
                )
                .into());
            }
        }

        Ok(ChatMessageRepository::new(self.db)
            .get_conversation(user_id, shipper_id)
            .await?)
    }

    /// Marks a message as read by one of its recipients.
    ///
    /// # Returns
    /// - `Ok(ChatMessage)` - The message, now read
    /// - `Err(AppError::NotFound)` - No such message
    /// - `Err(AuthError::AccessDenied)` - Viewer is not a party of the message's order
    /// - `Err(ChatError::OwnMessage)` - Viewer wrote the message under the same role
    pub async fn mark_read(&self, message_id: i32, viewer: &User) -> Result<ChatMessage, AppError> {
        let repo = ChatMessageRepository::new(self.db);
        let not_found = || AppError::NotFound(format!("Message {} not found", message_id));

        let mut message = repo.find_by_id(message_id).await?.ok_or_else(not_found)?;

        let (_, party) = OrderService::new(self.db)
            .get_with_party(message.order_id, viewer)
            .await?;
        if sender_role_of(party) == message.sender_role {
            return Err(ChatError::OwnMessage(message_id).into());
        }

        if !repo.mark_read(message_id).await? {
            return Err(not_found());
        }
        message.is_read = true;

        Ok(message)
    }
}
