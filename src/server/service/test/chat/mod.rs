use entity::sea_orm_active_enums::ChatSenderRole;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, chat::ChatError, AppError},
    model::{chat::MAX_MESSAGE_CHARS, user::User},
    service::chat::ChatService,
};

mod get_conversation;
mod mark_read;

/// Customer, shipper account and admin around one assigned order.
struct ChatParties {
    customer: User,
    shipper_user: User,
    shipper_id: i32,
    admin: User,
    order_id: i32,
}

async fn assigned_order(db: &DatabaseConnection) -> Result<ChatParties, AppError> {
    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let customer = User::from_entity(factory::create_user(db).await?);
    let (shipper_user, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let order = factory::order::OrderFactory::new(db, customer.id, restaurant.id)
        .assigned_to(shipper.id)
        .build()
        .await?;

    Ok(ChatParties {
        customer,
        shipper_user: User::from_entity(shipper_user),
        shipper_id: shipper.id,
        admin,
        order_id: order.id,
    })
}
