use super::*;

/// Tests phone lookup against another shipper.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_phone_of_other_shipper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::shipper::ShipperFactory::new(db, user.id)
        .phone("0911111111")
        .build()
        .await?;

    let taken = ShipperRepository::new(db)
        .phone_taken("0911111111", None)
        .await?;

    assert!(taken);

    Ok(())
}

/// Tests phone lookup excluding the shipper that owns it.
///
/// Verifies that a shipper keeping their own phone on update is not a conflict.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_own_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shipper = factory::shipper::ShipperFactory::new(db, user.id)
        .phone("0922222222")
        .build()
        .await?;

    let taken = ShipperRepository::new(db)
        .phone_taken("0922222222", Some(shipper.id))
        .await?;

    assert!(!taken);

    Ok(())
}
