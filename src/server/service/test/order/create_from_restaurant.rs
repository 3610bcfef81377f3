use super::*;

/// Tests checkout of one restaurant's lines from a mixed cart.
///
/// Expected: Ok with only that restaurant's lines ordered; the others stay in the cart
#[tokio::test]
async fn orders_only_lines_of_restaurant() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (pho_shop, _, pho) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let (_, _, pizza) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    factory::create_cart_item(db, cart.id, pho.id, 2).await?;
    let pizza_line = factory::create_cart_item(db, cart.id, pizza.id, 1).await?;

    let order = OrderService::new(db)
        .create_from_restaurant(CreateOrderFromRestaurantParam {
            user_id: user.id,
            restaurant_id: pho_shop.id,
            order_time: None,
        })
        .await?;

    assert_eq!(order.restaurant_id, pho_shop.id);
    assert_eq!(order.details.len(), 1);
    assert_eq!(order.details[0].menu_item_id, pho.id);
    assert_eq!(order.total_price, pho.base_price * 2);

    let remaining = CartItemRepository::new(db).get_by_cart(cart.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, pizza_line.id);

    Ok(())
}

/// Tests checkout for a restaurant with nothing in the cart.
///
/// Expected: Err(OrderError::NoItemsForRestaurant)
#[tokio::test]
async fn rejects_restaurant_without_lines() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, pho) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let other = factory::create_restaurant(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    factory::create_cart_item(db, cart.id, pho.id, 1).await?;

    let result = OrderService::new(db)
        .create_from_restaurant(CreateOrderFromRestaurantParam {
            user_id: user.id,
            restaurant_id: other.id,
            order_time: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::NoItemsForRestaurant(id))) if id == other.id
    ));

    Ok(())
}

/// Tests checkout from an empty cart.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_empty_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    factory::create_cart(db, user.id).await?;

    let result = OrderService::new(db)
        .create_from_restaurant(CreateOrderFromRestaurantParam {
            user_id: user.id,
            restaurant_id: restaurant.id,
            order_time: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
