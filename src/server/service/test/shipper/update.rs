use super::*;

/// Tests updating a shipper while keeping their phone.
///
/// Expected: Ok with the new name
#[tokio::test]
async fn updates_name_keeping_phone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, shipper) = factory::helpers::create_shipper_with_user(db, true).await?;

    let updated = ShipperService::new(db)
        .update(UpdateShipperParam {
            id: shipper.id,
            name: "Renamed".to_string(),
            phone: shipper.phone.clone(),
        })
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.phone, shipper.phone);

    Ok(())
}

/// Tests taking another shipper's phone on update.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_phone_of_other_shipper() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_shipper_with_user(db, true).await?;
    let (_, second) = factory::helpers::create_shipper_with_user(db, true).await?;

    let result = ShipperService::new(db)
        .update(UpdateShipperParam {
            id: second.id,
            name: second.name.clone(),
            phone: first.phone.clone(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests toggling availability.
///
/// Expected: Ok with is_online reflecting the last call
#[tokio::test]
async fn toggles_online() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, shipper) = factory::helpers::create_shipper_with_user(db, false).await?;

    let service = ShipperService::new(db);
    assert!(service.set_online(shipper.id, true).await?.is_online);
    assert!(!service.set_online(shipper.id, false).await?.is_online);

    Ok(())
}
