use super::*;

/// Tests that a user with a shipper profile passes.
///
/// Expected: Ok((User, Shipper)) with the profile linked to the user
#[tokio::test]
async fn grants_access_to_shipper() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, shipper) = factory::helpers::create_shipper_with_user(db, false).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let (returned_user, returned_shipper) =
        AuthGuard::new(db, session).require_shipper().await?;

    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_shipper.id, shipper.id);

    Ok(())
}

/// Tests that a user without a shipper profile is denied.
///
/// Verifies that admins are not implicitly shippers.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_user_without_shipper_profile() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session).require_shipper().await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, admin.id);
            assert!(message.contains("shipper"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
