use super::*;

/// Tests finding a line by menu item and option set in any order.
///
/// Expected: Ok(Some) with the existing line
#[tokio::test]
async fn finds_line_regardless_of_option_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let first = factory::create_menu_item_option(db, item.id, 0).await?;
    let second = factory::create_menu_item_option(db, item.id, 5_000).await?;

    let repo = CartItemRepository::new(db);
    let line = repo.create(cart.id, item.id, 1, &[first.id, second.id]).await?;

    let found = repo
        .find_by_key(cart.id, item.id, &[second.id, first.id])
        .await?;

    assert_eq!(found.map(|l| l.id), Some(line.id));

    Ok(())
}

/// Tests that a different option set is a different line.
///
/// Expected: Ok(None) for a subset of the stored options
#[tokio::test]
async fn returns_none_for_different_options() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let cart = factory::create_cart(db, user.id).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;
    let first = factory::create_menu_item_option(db, item.id, 0).await?;
    let second = factory::create_menu_item_option(db, item.id, 5_000).await?;

    let repo = CartItemRepository::new(db);
    repo.create(cart.id, item.id, 1, &[first.id, second.id]).await?;

    assert!(repo.find_by_key(cart.id, item.id, &[first.id]).await?.is_none());
    assert!(repo.find_by_key(cart.id, item.id, &[]).await?.is_none());

    Ok(())
}
