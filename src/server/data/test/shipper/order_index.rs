use super::*;

/// Tests adding the same order to the index twice.
///
/// Expected: Ok with the order listed once
#[tokio::test]
async fn adds_order_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let (_, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let order = factory::create_order(db, user.id, restaurant.id).await?;

    let repo = ShipperRepository::new(db);
    repo.add_order(shipper.id, order.id).await?;
    repo.add_order(shipper.id, order.id).await?;

    assert_eq!(repo.get_order_ids(shipper.id).await?, vec![order.id]);

    Ok(())
}

/// Tests removing an order from the index.
///
/// Expected: Ok(true) the first time, Ok(false) once it is gone
#[tokio::test]
async fn removes_indexed_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let (_, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;
    let order = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .assigned_to(shipper.id)
        .build()
        .await?;

    let repo = ShipperRepository::new(db);
    assert!(repo.remove_order(shipper.id, order.id).await?);
    assert!(!repo.remove_order(shipper.id, order.id).await?);
    assert!(repo.get_order_ids(shipper.id).await?.is_empty());

    Ok(())
}
