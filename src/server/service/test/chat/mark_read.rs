use super::*;

/// Tests the recipient marking a message as read.
///
/// Expected: Ok with is_read set, and the stored message read as well
#[tokio::test]
async fn recipient_marks_message_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parties = assigned_order(db).await?;
    let service = ChatService::new(db);
    let sent = service
        .send(parties.order_id, &parties.shipper_user, "At the gate")
        .await?;

    let read = service.mark_read(sent.id, &parties.customer).await?;
    assert!(read.is_read);

    let messages = service
        .get_by_order(parties.order_id, &parties.shipper_user)
        .await?;
    assert!(messages[0].is_read);

    Ok(())
}

/// Tests the sender marking their own message and a stranger marking any message.
///
/// Expected: Err(ChatError::OwnMessage), Err(AuthError::AccessDenied), and the
/// message left unread
#[tokio::test]
async fn only_recipients_mark_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parties = assigned_order(db).await?;
    let stranger = User::from_entity(factory::create_user(db).await?);
    let service = ChatService::new(db);
    let sent = service
        .send(parties.order_id, &parties.customer, "Hello")
        .await?;

    assert!(matches!(
        service.mark_read(sent.id, &parties.customer).await,
        Err(AppError::ChatErr(ChatError::OwnMessage(id))) if id == sent.id
    ));
    assert!(matches!(
        service.mark_read(sent.id, &stranger).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));
    assert!(matches!(
        service.mark_read(sent.id + 100, &parties.shipper_user).await,
        Err(AppError::NotFound(_))
    ));

    let messages = service
        .get_by_order(parties.order_id, &parties.customer)
        .await?;
    assert!(!messages[0].is_read);

    Ok(())
}
