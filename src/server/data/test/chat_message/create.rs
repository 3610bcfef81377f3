use super::*;

/// Tests storing messages and reading them back per order.
///
/// Expected: Ok with unread messages of the order only, oldest first
#[tokio::test]
async fn lists_order_messages_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let (_, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let order = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .assigned_to(shipper.id)
        .build()
        .await?;
    let other = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .assigned_to(shipper.id)
        .build()
        .await?;

    let repo = ChatMessageRepository::new(db);
    let first = repo
        .create(message(&order, shipper.id, ChatSenderRole::User, "Where are you?"))
        .await?;
    let second = repo
        .create(message(&order, shipper.id, ChatSenderRole::Shipper, "Two minutes"))
        .await?;
    repo.create(message(&other, shipper.id, ChatSenderRole::User, "Other order"))
        .await?;

    assert!(!first.is_read);
    assert_eq!(first.sender_role, ChatSenderRole::User);

    let messages = repo.get_by_order(order.id).await?;
    assert_eq!(messages, vec![first, second]);

    Ok(())
}

/// Tests reading a customer/shipper conversation across orders.
///
/// Expected: Ok with the pair's messages from both orders and nothing else
#[tokio::test]
async fn conversation_spans_orders_of_the_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let (_, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let (_, other_shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let first_order = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .assigned_to(shipper.id)
        .build()
        .await?;
    let second_order = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .assigned_to(shipper.id)
        .build()
        .await?;
    let foreign_order = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .assigned_to(other_shipper.id)
        .build()
        .await?;

    let repo = ChatMessageRepository::new(db);
    repo.create(message(&first_order, shipper.id, ChatSenderRole::User, "a"))
        .await?;
    repo.create(message(&foreign_order, other_shipper.id, ChatSenderRole::User, "b"))
        .await?;
    repo.create(message(&second_order, shipper.id, ChatSenderRole::Shipper, "c"))
        .await?;

    let conversation = repo.get_conversation(user.id, shipper.id).await?;
    let texts: Vec<&str> = conversation.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(texts, vec!["a", "c"]);

    Ok(())
}
