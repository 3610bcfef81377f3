use super::*;

/// Tests who may read an order.
///
/// Verifies that the customer, an admin and the assigned shipper can read the
/// order while an unrelated user cannot.
///
/// Expected: Ok for the three parties, Err(AuthError::AccessDenied) for the stranger
#[tokio::test]
async fn restricts_order_to_its_parties() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = User::from_entity(factory::create_user(db).await?);
    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let stranger = User::from_entity(factory::create_user(db).await?);
    let (shipper_user, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let shipper_user = User::from_entity(shipper_user);
    let restaurant = factory::create_restaurant(db).await?;
    let order = factory::order::OrderFactory::new(db, customer.id, restaurant.id)
        .assigned_to(shipper.id)
        .build()
        .await?;

    let service = OrderService::new(db);

    assert_eq!(service.get_for_viewer(order.id, &customer).await?.id, order.id);
    assert_eq!(service.get_for_viewer(order.id, &admin).await?.id, order.id);
    assert_eq!(service.get_for_viewer(order.id, &shipper_user).await?.id, order.id);

    let result = service.get_for_viewer(order.id, &stranger).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == stranger.id
    ));

    Ok(())
}

/// Tests the party reported for each reader of an order.
///
/// Expected: Customer for the buyer, Shipper with the shipper id for the assigned
/// shipper, Admin for an admin
#[tokio::test]
async fn reports_viewer_party() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = User::from_entity(factory::create_user(db).await?);
    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let (shipper_user, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let shipper_user = User::from_entity(shipper_user);
    let restaurant = factory::create_restaurant(db).await?;
    let order = factory::order::OrderFactory::new(db, customer.id, restaurant.id)
        .assigned_to(shipper.id)
        .build()
        .await?;

    let service = OrderService::new(db);

    let (_, party) = service.get_with_party(order.id, &customer).await?;
    assert_eq!(party, OrderParty::Customer);
    let (_, party) = service.get_with_party(order.id, &shipper_user).await?;
    assert_eq!(party, OrderParty::Shipper(shipper.id));
    let (_, party) = service.get_with_party(order.id, &admin).await?;
    assert_eq!(party, OrderParty::Admin);

    Ok(())
}
