use super::*;

/// Tests changing the quantity of an own line.
///
/// Expected: Ok with the new quantity persisted
#[tokio::test]
async fn updates_own_line() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let line = factory::create_cart_item(db, cart.id, item.id, 1).await?;

    let service = CartService::new(db);
    let updated = service.update_item(user.id, line.id, 4).await?;
    assert_eq!(updated.quantity, 4);

    let (_, items) = service.get_cart(user.id).await?;
    assert_eq!(items[0].quantity, 4);

    Ok(())
}

/// Tests setting a quantity above the per-line limit.
///
/// Expected: Err(CartError::InvalidQuantity) and the stored quantity unchanged
#[tokio::test]
async fn rejects_quantity_above_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let line = factory::create_cart_item(db, cart.id, item.id, 2).await?;

    let service = CartService::new(db);
    let result = service
        .update_item(user.id, line.id, MAX_LINE_QUANTITY + 1)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CartErr(CartError::InvalidQuantity(_)))
    ));

    let (_, items) = service.get_cart(user.id).await?;
    assert_eq!(items[0].quantity, 2);

    Ok(())
}

/// Tests touching a line in another user's cart.
///
/// Verifies that foreign lines are reported as missing for both update and
/// removal, and stay unchanged.
///
/// Expected: Err(AppError::NotFound) for both calls
#[tokio::test]
async fn hides_foreign_line() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    factory::create_cart(db, user.id).await?;
    let other_cart = factory::create_cart(db, other.id).await?;
    let foreign = factory::create_cart_item(db, other_cart.id, item.id, 1).await?;

    let service = CartService::new(db);

    let result = service.update_item(user.id, foreign.id, 5).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service.remove_item(user.id, foreign.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let (_, items) = service.get_cart(other.id).await?;
    assert_eq!(items[0].quantity, 1);

    Ok(())
}

/// Tests clearing the cart.
///
/// Expected: Ok with no lines left
#[tokio::test]
async fn clears_all_lines() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    factory::create_cart_item(db, cart.id, item.id, 1).await?;
    factory::create_cart_item(db, cart.id, item.id, 2).await?;

    let service = CartService::new(db);
    service.clear(user.id).await?;

    let (_, items) = service.get_cart(user.id).await?;
    assert!(items.is_empty());

    Ok(())
}
