use super::*;

/// Tests who may read a customer/shipper conversation.
///
/// Expected: Ok for the customer, the shipper and an admin; Err(AuthError::AccessDenied)
/// for a stranger
#[tokio::test]
async fn restricts_conversation_to_its_sides() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parties = assigned_order(db).await?;
    let stranger = User::from_entity(factory::create_user(db).await?);
    let service = ChatService::new(db);
    service
        .send(parties.order_id, &parties.customer, "Hi")
        .await?;

    for viewer in [&parties.customer, &parties.shipper_user, &parties.admin] {
        let messages = service
            .get_conversation(parties.customer.id, parties.shipper_id, viewer)
            .await?;
        assert_eq!(messages.len(), 1);
    }

    let result = service
        .get_conversation(parties.customer.id, parties.shipper_id, &stranger)
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == stranger.id
    ));

    Ok(())
}
