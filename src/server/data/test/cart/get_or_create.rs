use super::*;

/// Tests creating a cart on first use.
///
/// Verifies that a user without a cart gets a new empty cart at version 0.
///
/// Expected: Ok with a cart owned by the user
#[tokio::test]
async fn creates_cart_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let cart = CartRepository::new(db).get_or_create(user.id).await?;

    assert_eq!(cart.user_id, user.id);
    assert_eq!(cart.version, 0);

    Ok(())
}

/// Tests that an existing cart is reused.
///
/// Expected: Ok with the same cart id on every call
#[tokio::test]
async fn returns_existing_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::create_cart(db, user.id).await?;

    let repo = CartRepository::new(db);
    let first = repo.get_or_create(user.id).await?;
    let second = repo.get_or_create(user.id).await?;

    assert_eq!(first.id, existing.id);
    assert_eq!(second.id, existing.id);

    Ok(())
}
