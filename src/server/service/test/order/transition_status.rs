use super::*;

/// Tests a shipper moving their order through delivery.
///
/// Verifies that the order leaves the shipper's index once it is DELIVERED.
///
/// Expected: Ok for ASSIGNED -> DELIVERING -> DELIVERED with the index emptied
#[tokio::test]
async fn shipper_delivers_own_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let (_, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let order = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .assigned_to(shipper.id)
        .build()
        .await?;

    let service = OrderService::new(db);
    let actor = Actor::Shipper(shipper.id);

    let order = service
        .transition_status(order.id, OrderStatus::Delivering, actor)
        .await?;
    assert_eq!(order.status, OrderStatus::Delivering);
    assert_eq!(
        ShipperRepository::new(db).get_order_ids(shipper.id).await?,
        vec![order.id]
    );

    let order = service
        .transition_status(order.id, OrderStatus::Delivered, actor)
        .await?;
    assert_eq!(order.status, OrderStatus::Delivered);
    assert_eq!(order.shipper_id, Some(shipper.id));
    assert!(ShipperRepository::new(db)
        .get_order_ids(shipper.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests an admin cancelling an assigned order.
///
/// Expected: Ok with status CANCELLED and the order removed from the shipper's index
#[tokio::test]
async fn admin_cancel_clears_shipper_index() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let (_, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let order = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .assigned_to(shipper.id)
        .build()
        .await?;

    let order = OrderService::new(db)
        .transition_status(order.id, OrderStatus::Cancelled, Actor::Admin)
        .await?;

    assert_eq!(order.status, OrderStatus::Cancelled);
    assert!(ShipperRepository::new(db)
        .get_order_ids(shipper.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests a shipper moving another shipper's order.
///
/// Expected: Err(OrderError::NotOrderShipper) and the status unchanged
#[tokio::test]
async fn rejects_shipper_of_other_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let (_, owner) = factory::helpers::create_shipper_with_user(db, true).await?;
    let (_, intruder) = factory::helpers::create_shipper_with_user(db, true).await?;
    let order = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .assigned_to(owner.id)
        .build()
        .await?;

    let service = OrderService::new(db);
    let result = service
        .transition_status(order.id, OrderStatus::Delivering, Actor::Shipper(intruder.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::NotOrderShipper { shipper_id, .. })) if shipper_id == intruder.id
    ));

    let orders = service.get_shipper_orders(owner.id).await?;
    assert_eq!(orders[0].status, OrderStatus::Assigned);

    Ok(())
}

/// Tests an admin moving a pending order to ASSIGNED without assigning a shipper.
///
/// Verifies that the order stays PENDING and can still be assigned afterwards.
///
/// Expected: Err(OrderError::ShipperRequired), then Ok from assign_shipper
#[tokio::test]
async fn admin_cannot_assign_without_shipper() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let (_, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let order = factory::create_order(db, user.id, restaurant.id).await?;

    let service = OrderService::new(db);
    let result = service
        .transition_status(order.id, OrderStatus::Assigned, Actor::Admin)
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::ShipperRequired(id))) if id == order.id
    ));

    let assigned = service.assign_shipper(order.id, shipper.id).await?;
    assert_eq!(assigned.status, OrderStatus::Assigned);
    assert_eq!(assigned.shipper_id, Some(shipper.id));

    Ok(())
}

/// Tests leaving a terminal status.
///
/// Expected: Err(OrderError::InvalidTransition)
#[tokio::test]
async fn rejects_transition_out_of_terminal_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let order = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .status(OrderStatus::Delivered)
        .build()
        .await?;

    let result = OrderService::new(db)
        .transition_status(order.id, OrderStatus::Cancelled, Actor::Admin)
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Cancelled
        }))
    ));

    Ok(())
}

/// Tests a shipper skipping DELIVERING.
///
/// Expected: Err(OrderError::InvalidTransition)
#[tokio::test]
async fn rejects_skipping_delivering() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let (_, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let order = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .assigned_to(shipper.id)
        .build()
        .await?;

    let result = OrderService::new(db)
        .transition_status(order.id, OrderStatus::Delivered, Actor::Shipper(shipper.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::InvalidTransition { .. }))
    ));

    Ok(())
}

/// Tests a status change on an unknown order.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderService::new(db)
        .transition_status(9999, OrderStatus::Cancelled, Actor::Admin)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
