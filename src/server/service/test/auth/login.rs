use super::*;

/// Tests logging in with registered credentials.
///
/// Verifies that the email is matched case-insensitively.
///
/// Expected: Ok with the registered user
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let registered = service
        .register(register_param("login@example.com", "correct horse"))
        .await?;

    let user = service.login(" Login@Example.com ", "correct horse").await?;

    assert_eq!(user.id, registered.id);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .register(register_param("wrong@example.com", "correct horse"))
        .await?;

    let result = service.login("wrong@example.com", "battery staple").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in as a user without a usable password.
///
/// Expected: Err(AuthError::InvalidCredentials) for factory users and unknown emails
#[tokio::test]
async fn rejects_unusable_hash_and_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = AuthService::new(db);

    let result = service.login(&user.email, "!").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let result = service.login("ghost@example.com", "password123").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
