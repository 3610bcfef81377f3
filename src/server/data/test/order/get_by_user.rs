use super::*;

/// Tests listing a user's orders.
///
/// Expected: Ok with only that user's orders
#[tokio::test]
async fn returns_only_user_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;

    factory::create_order(db, user.id, restaurant.id).await?;
    factory::create_order(db, user.id, restaurant.id).await?;
    factory::create_order(db, other.id, restaurant.id).await?;

    let orders = OrderRepository::new(db).get_by_user(user.id).await?;

    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o.user_id == user.id));

    Ok(())
}

/// Tests paginating all orders.
///
/// Expected: Ok with the requested page size and the full total
#[tokio::test]
async fn paginates_all_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    for _ in 0..3 {
        factory::create_order(db, user.id, restaurant.id).await?;
    }

    let (orders, total) = OrderRepository::new(db).get_all_paginated(0, 2).await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(total, 3);

    Ok(())
}
