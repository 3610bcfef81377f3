use super::*;

mod require_admin;

/// Tests that a request without a logged-in user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the session's user id
#[tokio::test]
async fn denies_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, 4242);
        }
        other => panic!("Expected UserNotInDatabase error, got: {:?}", other),
    }

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any logged-in user with a
/// valid database record is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned_user = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned_user.id, user.id);
    assert!(!returned_user.admin);

    Ok(())
}
