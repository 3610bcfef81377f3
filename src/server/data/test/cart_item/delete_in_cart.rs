use super::*;

/// Tests deleting selected lines of a cart.
///
/// Verifies that the returned count only includes lines of the given cart.
///
/// Expected: Ok(1) and the other cart's line untouched
#[tokio::test]
async fn deletes_only_lines_in_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let own_cart = factory::create_cart(db, owner.id).await?;
    let other_cart = factory::create_cart(db, other.id).await?;
    let (_, _, item) = factory::helpers::create_menu_item_with_dependencies(db).await?;

    let own_line = factory::create_cart_item(db, own_cart.id, item.id, 1).await?;
    let other_line = factory::create_cart_item(db, other_cart.id, item.id, 1).await?;

    let repo = CartItemRepository::new(db);
    let deleted = repo
        .delete_in_cart(own_cart.id, &[own_line.id, other_line.id])
        .await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(own_line.id).await?.is_none());
    assert!(repo.find_by_id(other_line.id).await?.is_some());

    Ok(())
}

/// Tests deleting with an empty id list.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_empty_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let cart = factory::create_cart(db, user.id).await?;

    let deleted = CartItemRepository::new(db).delete_in_cart(cart.id, &[]).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
