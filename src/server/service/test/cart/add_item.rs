use super::*;

/// Tests adding the same item and options twice.
///
/// Verifies that the second add increases the quantity of the existing line even
/// when the options are listed in a different order.
///
/// Expected: Ok with one line of quantity 3
#[tokio::test]
async fn merges_identical_line() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let large = factory::create_menu_item_option(db, item.id, 10_000).await?;
    let spicy = factory::create_menu_item_option(db, item.id, 0).await?;

    let service = CartService::new(db);
    let first = service
        .add_item(add_param(user.id, item.id, 1, vec![large.id, spicy.id]))
        .await?;
    let second = service
        .add_item(add_param(user.id, item.id, 2, vec![spicy.id, large.id]))
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.quantity, 3);

    let (_, items) = service.get_cart(user.id).await?;
    assert_eq!(items.len(), 1);

    Ok(())
}

/// Tests adding the same item with different options.
///
/// Expected: Ok with two separate lines
#[tokio::test]
async fn keeps_different_options_apart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let large = factory::create_menu_item_option(db, item.id, 10_000).await?;

    let service = CartService::new(db);
    service.add_item(add_param(user.id, item.id, 1, vec![])).await?;
    service
        .add_item(add_param(user.id, item.id, 1, vec![large.id]))
        .await?;

    let (_, items) = service.get_cart(user.id).await?;
    assert_eq!(items.len(), 2);

    Ok(())
}

/// Tests adding with a quantity below 1.
///
/// Expected: Err(CartError::InvalidQuantity)
#[tokio::test]
async fn rejects_non_positive_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;

    let result = CartService::new(db)
        .add_item(add_param(user.id, item.id, 0, vec![]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::CartErr(CartError::InvalidQuantity(0)))
    ));

    Ok(())
}

/// Tests adding twice to a line so that the merged quantity passes the limit.
///
/// Verifies that huge quantities are rejected up front and that a merge above the
/// limit leaves the existing line unchanged instead of overflowing.
///
/// Expected: Err(CartError::InvalidQuantity) for both adds, line quantity unchanged
#[tokio::test]
async fn rejects_merge_above_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;

    let service = CartService::new(db);

    let result = service
        .add_item(add_param(user.id, item.id, 2_000_000_000, vec![]))
        .await;
    assert!(matches!(
        result,
        Err(AppError::CartErr(CartError::InvalidQuantity(2_000_000_000)))
    ));

    let line = service
        .add_item(add_param(user.id, item.id, MAX_LINE_QUANTITY, vec![]))
        .await?;
    let result = service.add_item(add_param(user.id, item.id, 1, vec![])).await;
    assert!(matches!(
        result,
        Err(AppError::CartErr(CartError::InvalidQuantity(q))) if q == i64::from(MAX_LINE_QUANTITY) + 1
    ));

    let (_, items) = service.get_cart(user.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, line.id);
    assert_eq!(items[0].quantity, MAX_LINE_QUANTITY);

    Ok(())
}

/// Tests adding an option that belongs to another menu item.
///
/// Expected: Err(CartError::OptionNotOnMenuItem) and the cart left empty
#[tokio::test]
async fn rejects_option_of_other_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, menu, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let other_item = factory::create_menu_item(db, menu.id).await?;
    let foreign = factory::create_menu_item_option(db, other_item.id, 5_000).await?;

    let service = CartService::new(db);
    let result = service
        .add_item(add_param(user.id, item.id, 1, vec![foreign.id]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::CartErr(CartError::OptionNotOnMenuItem { option_id, .. })) if option_id == foreign.id
    ));

    let (_, items) = service.get_cart(user.id).await?;
    assert!(items.is_empty());

    Ok(())
}

/// Tests adding an unknown menu item.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_menu_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = CartService::new(db)
        .add_item(add_param(user.id, 9999, 1, vec![]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
