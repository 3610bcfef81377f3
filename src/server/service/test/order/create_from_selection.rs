use super::*;

/// Tests checkout of two lines with the same item and no options.
///
/// Verifies that identical lines merge into one detail whose price is the base
/// price times the summed quantity, and that the lines leave the cart.
///
/// Expected: Ok with one detail of quantity 5 priced 225000
#[tokio::test]
async fn merges_identical_lines_into_one_detail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let menu = factory::create_menu(db, restaurant.id).await?;
    let item = factory::menu_item::MenuItemFactory::new(db, menu.id)
        .base_price(45_000)
        .build()
        .await?;
    let cart = factory::create_cart(db, user.id).await?;
    let first = factory::create_cart_item(db, cart.id, item.id, 2).await?;
    let second = factory::create_cart_item(db, cart.id, item.id, 3).await?;

    let order = OrderService::new(db)
        .create_from_selection(selection(user.id, vec![first.id, second.id]))
        .await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.restaurant_id, restaurant.id);
    assert_eq!(order.details.len(), 1);
    assert_eq!(order.details[0].quantity, 5);
    assert_eq!(order.details[0].price, 225_000);
    assert_eq!(order.total_price, 225_000);

    let remaining = CartItemRepository::new(db).get_by_cart(cart.id).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests that option adjustments are priced and snapshotted.
///
/// Expected: Ok with detail price (base + adjustments) * quantity
#[tokio::test]
async fn prices_option_adjustments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let menu = factory::create_menu(db, restaurant.id).await?;
    let item = factory::menu_item::MenuItemFactory::new(db, menu.id)
        .base_price(40_000)
        .build()
        .await?;
    let large = factory::create_menu_item_option(db, item.id, 10_000).await?;
    let no_onion = factory::create_menu_item_option(db, item.id, -2_000).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let line = factory::cart_item::CartItemFactory::new(db, cart.id, item.id)
        .quantity(2)
        .options(vec![large.id, no_onion.id])
        .build()
        .await?;

    let order = OrderService::new(db)
        .create_from_selection(selection(user.id, vec![line.id]))
        .await?;

    assert_eq!(order.total_price, 96_000);
    assert_eq!(order.details[0].options.len(), 2);

    Ok(())
}

/// Tests checkout with no order time given.
///
/// Verifies that the order time defaults to now and delivery is promised 45
/// minutes later.
///
/// Expected: Ok with order_time close to now and delivery_time 45 minutes after it
#[tokio::test]
async fn defaults_order_time_and_promises_delivery() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let line = factory::create_cart_item(db, cart.id, item.id, 1).await?;

    let before = Utc::now();
    let order = OrderService::new(db)
        .create_from_selection(selection(user.id, vec![line.id]))
        .await?;
    let after = Utc::now();

    assert!(order.order_time >= before - Duration::seconds(1));
    assert!(order.order_time <= after + Duration::seconds(1));
    assert_eq!(order.delivery_time - order.order_time, Duration::minutes(45));

    Ok(())
}

/// Tests checkout with an explicit order time.
///
/// Expected: Ok with the given order time kept
#[tokio::test]
async fn keeps_given_order_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let line = factory::create_cart_item(db, cart.id, item.id, 1).await?;

    let order_time = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let order = OrderService::new(db)
        .create_from_selection(CreateOrderFromSelectionParam {
            user_id: user.id,
            cart_item_ids: vec![line.id],
            order_time: Some(order_time),
        })
        .await?;

    assert_eq!(order.order_time, order_time);
    assert_eq!(
        order.delivery_time,
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 45, 0).unwrap()
    );

    Ok(())
}

/// Tests checkout of lines from two restaurants.
///
/// Expected: Err(OrderError::MixedRestaurants), no order and the cart untouched
#[tokio::test]
async fn rejects_lines_from_two_restaurants() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, pho) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let (_, _, pizza) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let first = factory::create_cart_item(db, cart.id, pho.id, 1).await?;
    let second = factory::create_cart_item(db, cart.id, pizza.id, 1).await?;

    let service = OrderService::new(db);
    let result = service
        .create_from_selection(selection(user.id, vec![first.id, second.id]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::MixedRestaurants))
    ));
    assert!(service.get_user_orders(user.id).await?.is_empty());
    assert_eq!(CartItemRepository::new(db).get_by_cart(cart.id).await?.len(), 2);

    Ok(())
}

/// Tests checkout with nothing selected.
///
/// Expected: Err(OrderError::EmptySelection)
#[tokio::test]
async fn rejects_empty_selection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = OrderService::new(db)
        .create_from_selection(selection(user.id, Vec::new()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::EmptySelection))
    ));

    Ok(())
}

/// Tests checkout of a line from another user's cart.
///
/// Expected: Err(AppError::NotFound) and the other cart untouched
#[tokio::test]
async fn rejects_foreign_cart_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    factory::create_cart(db, user.id).await?;
    let other_cart = factory::create_cart(db, other.id).await?;
    let foreign = factory::create_cart_item(db, other_cart.id, item.id, 1).await?;

    let result = OrderService::new(db)
        .create_from_selection(selection(user.id, vec![foreign.id]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(
        CartItemRepository::new(db).get_by_cart(other_cart.id).await?.len(),
        1
    );

    Ok(())
}

/// Tests checkout at a closed restaurant.
///
/// Expected: Err(OrderError::RestaurantClosed) and the line kept in the cart
#[tokio::test]
async fn rejects_closed_restaurant() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::restaurant::RestaurantFactory::new(db)
        .is_open(false)
        .build()
        .await?;
    let menu = factory::create_menu(db, restaurant.id).await?;
    let item = factory::create_menu_item(db, menu.id).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let line = factory::create_cart_item(db, cart.id, item.id, 1).await?;

    let result = OrderService::new(db)
        .create_from_selection(selection(user.id, vec![line.id]))
        .await;

    match result {
        Err(AppError::OrderErr(OrderError::RestaurantClosed(id))) => {
            assert_eq!(id, restaurant.id)
        }
        other => panic!("Expected RestaurantClosed error, got: {:?}", other),
    }
    assert!(CartItemRepository::new(db).find_by_id(line.id).await?.is_some());

    Ok(())
}

/// Tests that a checkout consumes the cart version.
///
/// Verifies that each successful checkout advances the cart version so a
/// concurrent checkout holding the previous version cannot also succeed.
///
/// Expected: Ok for both sequential checkouts with the version advanced twice
#[tokio::test]
async fn advances_cart_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let first = factory::create_cart_item(db, cart.id, item.id, 1).await?;
    let second = factory::create_cart_item(db, cart.id, item.id, 1).await?;

    let service = OrderService::new(db);
    service
        .create_from_selection(selection(user.id, vec![first.id]))
        .await?;
    service
        .create_from_selection(selection(user.id, vec![second.id]))
        .await?;

    let cart = CartRepository::new(db)
        .find_by_user(user.id)
        .await?
        .unwrap();
    assert_eq!(cart.version, 2);

    let result = service
        .create_from_selection(selection(user.id, vec![first.id]))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests checkout with a cart version that another checkout already consumed.
///
/// Verifies that the losing checkout fails before writing anything and leaves
/// the cart lines in place.
///
/// Expected: Err(OrderError::Conflict), no order rows and both lines kept
#[tokio::test]
async fn conflicts_on_stale_cart_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    factory::create_cart_item(db, cart.id, item.id, 1).await?;
    factory::create_cart_item(db, cart.id, item.id, 2).await?;

    let stale = CartRepository::new(db).find_by_user(user.id).await?.unwrap();
    let items = CartItemRepository::new(db).get_by_cart(cart.id).await?;
    assert!(CartRepository::new(db).bump_version(cart.id, stale.version).await?);

    let txn = db.begin().await?;
    let lines = resolve_lines(&txn, items).await?;
    let result = place_order(&txn, &stale, user.id, lines, None).await;
    txn.rollback().await?;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::Conflict(_)))
    ));
    assert_eq!(order_row_counts(db).await?, (0, 0));
    assert_eq!(CartItemRepository::new(db).get_by_cart(cart.id).await?.len(), 2);

    Ok(())
}

/// Tests checkout when a selected line disappears before it is consumed.
///
/// Verifies that the order written earlier in the same transaction is rolled
/// back together with everything else.
///
/// Expected: Err(OrderError::Conflict), order rows visible only inside the
/// transaction, and both lines present after rollback
#[tokio::test]
async fn rolls_back_order_when_lines_vanish() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let large = factory::create_menu_item_option(db, item.id, 10_000).await?;
    let cart = factory::create_cart(db, user.id).await?;
    factory::create_cart_item(db, cart.id, item.id, 1).await?;
    let second = factory::cart_item::CartItemFactory::new(db, cart.id, item.id)
        .quantity(2)
        .options(vec![large.id])
        .build()
        .await?;

    let txn = db.begin().await?;
    let cart = CartRepository::new(&txn).find_by_user(user.id).await?.unwrap();
    let items = CartItemRepository::new(&txn).get_by_cart(cart.id).await?;
    let lines = resolve_lines(&txn, items).await?;

    CartItemRepository::new(&txn).delete(second.id).await?;

    let result = place_order(&txn, &cart, user.id, lines, None).await;
    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::Conflict(_)))
    ));
    assert_eq!(order_row_counts(&txn).await?, (1, 2));

    txn.rollback().await?;

    assert_eq!(order_row_counts(db).await?, (0, 0));
    assert_eq!(CartItemRepository::new(db).get_by_cart(cart.id).await?.len(), 2);
    let cart = CartRepository::new(db).find_by_user(user.id).await?.unwrap();
    assert_eq!(cart.version, 0);

    Ok(())
}

/// Tests checkout of a line whose menu item row is gone.
///
/// Foreign keys are switched off so the line can outlive its menu item.
///
/// Expected: Err(AppError::NotFound), no order and the line kept
#[tokio::test]
async fn rejects_line_with_missing_menu_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let line = factory::create_cart_item(db, cart.id, item.id, 1).await?;

    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    entity::prelude::MenuItem::delete_by_id(item.id).exec(db).await?;

    let result = OrderService::new(db)
        .create_from_selection(selection(user.id, vec![line.id]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(order_row_counts(db).await?, (0, 0));
    assert!(CartItemRepository::new(db).find_by_id(line.id).await?.is_some());

    Ok(())
}

/// Tests checkout of a line whose selected option row is gone.
///
/// Expected: Err(AppError::NotFound), no order and the line kept
#[tokio::test]
async fn rejects_line_with_missing_option() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let large = factory::create_menu_item_option(db, item.id, 10_000).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let line = factory::cart_item::CartItemFactory::new(db, cart.id, item.id)
        .options(vec![large.id])
        .build()
        .await?;

    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    entity::prelude::MenuItemOption::delete_by_id(large.id)
        .exec(db)
        .await?;

    let result = OrderService::new(db)
        .create_from_selection(selection(user.id, vec![line.id]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(order_row_counts(db).await?, (0, 0));
    assert_eq!(
        CartItemRepository::new(db).find_by_id(line.id).await?.map(|l| l.option_ids),
        Some(vec![large.id])
    );

    Ok(())
}
