use super::*;

/// Tests bumping the version with the current value.
///
/// Expected: Ok(true) and the stored version incremented
#[tokio::test]
async fn bumps_matching_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let cart = factory::create_cart(db, user.id).await?;

    let repo = CartRepository::new(db);
    assert!(repo.bump_version(cart.id, 0).await?);

    let cart = repo.find_by_user(user.id).await?.unwrap();
    assert_eq!(cart.version, 1);

    Ok(())
}

/// Tests bumping the version with a stale value.
///
/// Verifies that a second checkout that read the same version loses the race.
///
/// Expected: Ok(false) and the stored version unchanged by the second call
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let cart = factory::create_cart(db, user.id).await?;

    let repo = CartRepository::new(db);
    assert!(repo.bump_version(cart.id, 0).await?);
    assert!(!repo.bump_version(cart.id, 0).await?);

    let cart = repo.find_by_user(user.id).await?.unwrap();
    assert_eq!(cart.version, 1);

    Ok(())
}
