use thiserror::Error;

use crate::server::model::chat::MAX_MESSAGE_CHARS;

/// Invalid chat requests. All of them surface as 400 Bad Request.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Message is {0} characters long, at most {max} are allowed", max = MAX_MESSAGE_CHARS)]
    MessageTooLong(usize),

    /// Chat connects a customer with a shipper, so the order needs one first.
    #[error("Order {0} has no shipper to chat with yet")]
    NoShipper(i32),

    /// Read receipts are set by the recipient, never by the sender.
    #[error("Message {0} was sent by you")]
    OwnMessage(i32),
}
