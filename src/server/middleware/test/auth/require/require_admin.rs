use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Verifies that the AuthGuard grants access when the user is logged in, exists
/// in the database, and has admin privileges.
///
/// Expected: Ok(User) with admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("AdminUser")
        .admin(true)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let returned_user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.name, "AdminUser");
    assert!(returned_user.admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("RegularUser")
        .admin(false)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests that a logged-out session loses admin access.
///
/// Expected: Err(AuthError::UserNotInSession) after clearing the session
#[tokio::test]
async fn denies_access_after_logout() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(admin.id).await?;
    auth_session.clear().await;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
